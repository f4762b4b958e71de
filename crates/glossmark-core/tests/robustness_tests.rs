//! Robustness tests: no input may panic, and the structural invariants
//! must hold on arbitrary mutations of realistic editorial copy.

use glossmark_core::{render, Block, Document, GlossaryTerm, Inline};

const SEED: u64 = 0x5eed;
const VARIANT_COUNT: usize = 64;
const MAX_MUTATION_STEPS: usize = 4;

const SAMPLE: &str = "# Field Notes\n\
\n\
## The Water Cycle\n\
\n\
Evaporation lifts **moisture** from oceans and lakes.\n\
Condensation forms *clouds* as vapor cools.\n\
\n\
* precipitation returns water to the surface\n\
* infiltration recharges groundwater\n\
- runoff feeds rivers\n\
\n\
> The cycle has no beginning and no end.\n\
\n\
### Why It Matters\n\
Fresh water is a **finite** resource in constant motion.\n";

fn glossary() -> Vec<GlossaryTerm> {
    vec![
        GlossaryTerm::new("evaporation", "liquid turning into vapor"),
        GlossaryTerm::new("condensation", "vapor turning into liquid"),
        GlossaryTerm::new("water cycle", "the continuous movement of water"),
        GlossaryTerm::new("water", "H2O"),
        GlossaryTerm::new("groundwater", "water held underground"),
    ]
}

/// Deterministic LCG so mutated variants are reproducible.
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 16
    }

    fn pick(&mut self, bound: usize) -> usize {
        (self.next() as usize) % bound.max(1)
    }
}

fn mutate(input: &str, rng: &mut Lcg) -> String {
    let mut text = input.to_string();

    for _ in 0..=rng.pick(MAX_MUTATION_STEPS) {
        match rng.pick(6) {
            0 => {
                // Sprinkle stray emphasis markers
                let pos = floor_char_boundary(&text, rng.pick(text.len() + 1));
                text.insert_str(pos, ["*", "**", "***"][rng.pick(3)]);
            }
            1 => {
                // Drop a random character
                if !text.is_empty() {
                    let pos = floor_char_boundary(&text, rng.pick(text.len()));
                    if let Some((i, _)) = text.char_indices().find(|(i, _)| *i >= pos) {
                        text.remove(i);
                    }
                }
            }
            2 => {
                // Truncate the tail
                let pos = floor_char_boundary(&text, text.len() - rng.pick(20.min(text.len())));
                text.truncate(pos);
            }
            3 => {
                // Duplicate a line
                let lines: Vec<&str> = text.lines().collect();
                if !lines.is_empty() {
                    let dup = lines[rng.pick(lines.len())].to_string();
                    text.push('\n');
                    text.push_str(&dup);
                }
            }
            4 => {
                // Blank-line noise
                let pos = floor_char_boundary(&text, rng.pick(text.len() + 1));
                text.insert_str(pos, "\n\n");
            }
            _ => {
                // Structural prefix noise
                let pos = floor_char_boundary(&text, rng.pick(text.len() + 1));
                text.insert_str(pos, ["# ", "## ", "> ", "* ", "- "][rng.pick(5)]);
            }
        }
    }

    text
}

fn floor_char_boundary(s: &str, mut pos: usize) -> usize {
    pos = pos.min(s.len());
    while pos > 0 && !s.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// One block per physical line, keyed by line index, in order.
fn assert_shape(doc: &Document, input: &str) {
    assert_eq!(doc.len(), input.lines().count());
    for (i, block) in doc.blocks.iter().enumerate() {
        assert_eq!(block.key(), i);
    }
}

/// Annotated ranges are disjoint and nothing is lost: concatenating
/// span text reproduces the trimmed line minus consumed markers, which
/// for marker-free lines is the trimmed line itself.
fn assert_reconstruction(doc: &Document, input: &str) {
    for (line, block) in input.lines().zip(&doc.blocks) {
        let trimmed = line.trim();
        if let Block::Spacer(_) = block {
            assert!(trimmed.is_empty());
            continue;
        }
        if !trimmed.contains('*') {
            let content = match trimmed {
                t if t.starts_with("### ") || t.starts_with("## ") => {
                    &t[t.find(' ').unwrap() + 1..]
                }
                t if t.starts_with("# ") || t.starts_with("> ") => &t[2..],
                t if t.starts_with("* ") || t.starts_with("- ") => &t[2..],
                t => t,
            };
            assert_eq!(block.plain_text(), content, "line: {:?}", line);
        }
    }
}

// ============================================================================
// Mutation Fuzzing
// ============================================================================

#[test]
fn test_mutated_inputs_never_panic_and_keep_shape() {
    let glossary = glossary();
    let mut rng = Lcg::new(SEED);

    for _ in 0..VARIANT_COUNT {
        let variant = mutate(SAMPLE, &mut rng);
        let doc = render(&variant, &glossary);

        assert_shape(&doc, &variant);
        assert_reconstruction(&doc, &variant);

        // Structural determinism on every variant
        assert_eq!(doc, render(&variant, &glossary));
    }
}

#[test]
fn test_mutated_glossaries_never_panic() {
    let mut rng = Lcg::new(SEED ^ 0xbad);
    let hostile = [
        "(", ")", "[", "]", "{", "}", "\\", "^", "$", ".", "|", "?", "*", "+", "a|b", "(?i)x",
        "\\b", "", "   ", "água", "multi word term",
    ];

    for _ in 0..VARIANT_COUNT {
        let mut terms = Vec::new();
        for _ in 0..rng.pick(6) {
            terms.push(GlossaryTerm::new(
                hostile[rng.pick(hostile.len())],
                "definition",
            ));
        }

        let doc = render(SAMPLE, &terms);
        assert_shape(&doc, SAMPLE);
    }
}

// ============================================================================
// Targeted Malformed Inputs
// ============================================================================

#[test]
fn test_marker_noise_degrades_to_text() {
    for input in [
        "********",
        "*",
        "**",
        "***",
        "* *",
        "*a**b*",
        "** unclosed and *also unclosed",
        "text ** with ** many ** markers",
    ] {
        let doc = render(input, &[]);
        assert_eq!(doc.len(), 1, "input: {:?}", input);
    }
}

#[test]
fn test_bare_prefix_lines_are_paragraphs() {
    // A marker without trailing content loses its space when trimmed,
    // so it carries no structural meaning
    for input in ["#", "# ", "##", "### ", ">", "> ", "*", "- "] {
        let doc = render(input, &[]);
        assert!(
            matches!(&doc.blocks[0], Block::Paragraph(_)),
            "input: {:?}",
            input
        );
    }
}

#[test]
fn test_crlf_input() {
    let doc = render("# Title\r\n\r\nBody text\r\n", &glossary());

    assert_eq!(doc.len(), 3);
    assert!(matches!(&doc.blocks[0], Block::Heading(_)));
    assert!(matches!(&doc.blocks[1], Block::Spacer(_)));
    assert_eq!(doc.blocks[2].plain_text(), "Body text");
}

#[test]
fn test_very_long_line() {
    let long = "word ".repeat(20_000);
    let doc = render(&long, &glossary());
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_control_characters_survive() {
    let doc = render("a\tb\u{0}c", &[]);
    assert_eq!(doc.len(), 1);
    assert!(matches!(&doc.blocks[0], Block::Paragraph(_)));
}

#[test]
fn test_term_equal_to_whole_line() {
    let glossary = [GlossaryTerm::new("entire line", "all of it")];
    let doc = render("entire line", &glossary);

    let spans = doc.blocks[0].spans();
    assert_eq!(spans.len(), 1);
    assert!(matches!(&spans[0], Inline::Glossary(a) if a.display == "entire line"));
}

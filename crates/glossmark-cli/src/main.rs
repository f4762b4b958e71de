//! Glossmark CLI - Render and inspect glossmark documents
//!
//! Usage:
//!   gmcli [OPTIONS] <FILE>
//!
//! Commands:
//!   render    Render and display the block tree (default)
//!   toc       List headings with their anchor slugs
//!   stats     Show document statistics

use std::env;
use std::fs;
use std::process;

use glossmark_core::ast::Heading;
use glossmark_core::{Block, Document, GlossaryTerm, Inline, Renderer};
use serde::{Deserialize, Serialize};

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = fs::read_to_string(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    let glossary = match &config.glossary {
        Some(path) => load_glossary(path)?,
        None => Vec::new(),
    };

    let renderer = Renderer::new(&glossary);
    let result = renderer.render_with_diagnostics(&input);

    // Skipped glossary terms are advisory, never fatal
    for warning in result.warnings.iter() {
        eprintln!("warning: {}", warning);
    }

    match config.command {
        Command::Render => cmd_render(&result.document, &config),
        Command::Toc => cmd_toc(&result.document, &config),
        Command::Stats => cmd_stats(&result.document, &input, &glossary),
    }

    Ok(())
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    glossary: Option<String>,
    format: OutputFormat,
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Render,
    Toc,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Render;
    let mut format = OutputFormat::Text;
    let mut verbose = false;
    let mut glossary = None;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("gmcli {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "-g" | "--glossary" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| "missing path after --glossary".to_string())?;
                glossary = Some(path.clone());
            }
            "render" => command = Command::Render,
            "toc" => command = Command::Toc,
            "stats" => command = Command::Stats,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        glossary,
        format,
        verbose,
    })
}

fn print_help() {
    eprintln!(
        r#"gmcli - glossmark document renderer and inspector

USAGE:
    gmcli [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    render      Render and display the block tree (default)
    toc         List headings with their anchor slugs
    stats       Show document statistics

OPTIONS:
    -g, --glossary <FILE>    Glossary JSON: [{{"term": "...", "definition": "..."}}]
    -v, --verbose            Show spans for every block
    -j, --json               Output in JSON format
    -h, --help               Print help information
    -V, --version            Print version information

EXAMPLES:
    gmcli article.txt                       Render an article
    gmcli -g terms.json article.txt         Render with glossary annotation
    gmcli -j -g terms.json article.txt      Output the block tree as JSON
    gmcli toc article.txt                   List heading anchors
    gmcli stats article.txt                 Show document statistics
"#
    );
}

// =============================================================================
// Glossary Input
// =============================================================================

#[derive(Deserialize)]
struct GlossaryEntry {
    term: String,
    definition: String,
}

fn load_glossary(path: &str) -> Result<Vec<GlossaryTerm>, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("failed to read glossary '{}': {}", path, e))?;

    let entries: Vec<GlossaryEntry> = serde_json::from_str(&raw)
        .map_err(|e| format!("invalid glossary JSON in '{}': {}", path, e))?;

    Ok(entries
        .into_iter()
        .map(|e| GlossaryTerm::new(e.term, e.definition))
        .collect())
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(doc: &Document, config: &Config) {
    match config.format {
        OutputFormat::Json => print_json(doc),
        OutputFormat::Text => {
            if config.verbose {
                print_document_verbose(doc);
            } else {
                print_document_summary(doc);
            }
        }
    }
}

// =============================================================================
// Toc Command
// =============================================================================

#[derive(Serialize)]
struct TocEntry<'a> {
    level: u8,
    slug: &'a str,
    text: String,
}

fn cmd_toc(doc: &Document, config: &Config) {
    match config.format {
        OutputFormat::Json => {
            let entries: Vec<TocEntry> = doc
                .headings()
                .map(|h| TocEntry {
                    level: h.level,
                    slug: &h.slug,
                    text: heading_text(h),
                })
                .collect();
            match serde_json::to_string_pretty(&entries) {
                Ok(out) => println!("{}", out),
                Err(e) => eprintln!("error: failed to serialize toc: {}", e),
            }
        }
        OutputFormat::Text => {
            for h in doc.headings() {
                let indent = "  ".repeat(h.level.saturating_sub(1) as usize);
                println!("{}{} #{}", indent, heading_text(h), h.slug);
            }
        }
    }
}

fn heading_text(h: &Heading) -> String {
    let mut text = String::new();
    for span in &h.spans {
        text.push_str(span.literal());
    }
    text
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(doc: &Document, input: &str, glossary: &[GlossaryTerm]) {
    let stats = DocumentStats::from_document(doc, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Glossary terms: {}", glossary.len());
    println!();
    println!("Blocks:");
    println!("  Total:          {}", doc.len());
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  List items:     {}", stats.list_items);
    println!("  Blockquotes:    {}", stats.blockquotes);
    println!("  Spacers:        {}", stats.spacers);
    println!();
    println!("Spans:");
    println!("  Annotations:    {}", stats.annotations);
    println!("  Bold:           {}", stats.bold);
    println!("  Italic:         {}", stats.italic);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);
}

#[derive(Default)]
struct DocumentStats {
    headings: usize,
    paragraphs: usize,
    list_items: usize,
    blockquotes: usize,
    spacers: usize,
    annotations: usize,
    bold: usize,
    italic: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_document(doc: &Document, input: &str) -> Self {
        let mut stats = Self {
            chars: input.len(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
            ..Self::default()
        };

        for block in &doc.blocks {
            match block {
                Block::Heading(_) => stats.headings += 1,
                Block::Paragraph(_) => stats.paragraphs += 1,
                Block::ListItem(_) => stats.list_items += 1,
                Block::Blockquote(_) => stats.blockquotes += 1,
                Block::Spacer(_) => stats.spacers += 1,
            }
            for span in block.spans() {
                match span {
                    Inline::Glossary(_) => stats.annotations += 1,
                    Inline::Bold(_) => stats.bold += 1,
                    Inline::Italic(_) => stats.italic += 1,
                    Inline::Text(_) => {}
                }
            }
        }

        stats
    }
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    blocks: Vec<JsonBlock<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonBlock<'a> {
    Heading {
        key: usize,
        level: u8,
        slug: &'a str,
        spans: Vec<JsonSpan<'a>>,
    },
    Paragraph {
        key: usize,
        spans: Vec<JsonSpan<'a>>,
    },
    ListItem {
        key: usize,
        spans: Vec<JsonSpan<'a>>,
    },
    Blockquote {
        key: usize,
        spans: Vec<JsonSpan<'a>>,
    },
    Spacer {
        key: usize,
    },
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonSpan<'a> {
    Text {
        text: &'a str,
    },
    Bold {
        text: &'a str,
    },
    Italic {
        text: &'a str,
    },
    Glossary {
        term: &'a str,
        definition: &'a str,
        display: &'a str,
    },
}

fn print_json(doc: &Document) {
    let json_doc = convert_document(doc);
    match serde_json::to_string_pretty(&json_doc) {
        Ok(out) => println!("{}", out),
        Err(e) => eprintln!("error: failed to serialize document: {}", e),
    }
}

fn convert_document<'a>(doc: &'a Document) -> JsonDocument<'a> {
    JsonDocument {
        blocks: doc.blocks.iter().map(convert_block).collect(),
    }
}

fn convert_block<'a>(block: &'a Block) -> JsonBlock<'a> {
    match block {
        Block::Heading(h) => JsonBlock::Heading {
            key: h.key,
            level: h.level,
            slug: &h.slug,
            spans: h.spans.iter().map(convert_span).collect(),
        },
        Block::Paragraph(p) => JsonBlock::Paragraph {
            key: p.key,
            spans: p.spans.iter().map(convert_span).collect(),
        },
        Block::ListItem(li) => JsonBlock::ListItem {
            key: li.key,
            spans: li.spans.iter().map(convert_span).collect(),
        },
        Block::Blockquote(q) => JsonBlock::Blockquote {
            key: q.key,
            spans: q.spans.iter().map(convert_span).collect(),
        },
        Block::Spacer(s) => JsonBlock::Spacer { key: s.key },
    }
}

fn convert_span<'a>(span: &'a Inline) -> JsonSpan<'a> {
    match span {
        Inline::Text(t) => JsonSpan::Text { text: &t.content },
        Inline::Bold(b) => JsonSpan::Bold { text: &b.content },
        Inline::Italic(i) => JsonSpan::Italic { text: &i.content },
        Inline::Glossary(a) => JsonSpan::Glossary {
            term: &a.term,
            definition: &a.definition,
            display: &a.display,
        },
    }
}

// =============================================================================
// Text Output
// =============================================================================

fn print_document_summary(doc: &Document) {
    println!("Blocks: {}", doc.len());
    for block in &doc.blocks {
        println!("  [{}] {}", block.key(), describe_block(block));
    }
}

fn print_document_verbose(doc: &Document) {
    println!("=== Glossmark Document ===");
    println!();
    println!("Blocks: {}", doc.len());

    for block in &doc.blocks {
        println!();
        println!("[{}] {}", block.key(), describe_block(block));
        for span in block.spans() {
            println!("  {}", describe_span(span));
        }
    }
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Heading(h) => format!("Heading (level {}, #{})", h.level, h.slug),
        Block::Paragraph(_) => "Paragraph".to_string(),
        Block::ListItem(_) => "ListItem".to_string(),
        Block::Blockquote(_) => "Blockquote".to_string(),
        Block::Spacer(_) => "Spacer".to_string(),
    }
}

fn describe_span(span: &Inline) -> String {
    match span {
        Inline::Text(t) => format!("Text {:?}", t.content),
        Inline::Bold(b) => format!("Bold {:?}", b.content),
        Inline::Italic(i) => format!("Italic {:?}", i.content),
        Inline::Glossary(a) => format!("Glossary {:?} (term: {})", a.display, a.term),
    }
}

use anyhow::{Context, Result, bail};
use inkdown_config::{Config, Features};
use inkdown_engine::parsing::inline::kinds::{
    BoldParser, CodeSpanParser, HtmlAnchorParser, ImageParser, ItalicParser, LineBreakParser,
    LinkAnchorParser, LinkParser, StrikethroughParser,
};
use inkdown_engine::{
    BlockOptions, BlockOutline, DocumentOutline, InlineOutline, ParserRegistry, io, outline,
};
use relative_path::RelativePathBuf;
use std::{env, path::PathBuf, process};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut json = false;
    let mut file: Option<String> = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            other if file.is_none() => file = Some(other.to_string()),
            other => bail!("unexpected argument: {other}"),
        }
    }
    let Some(file) = file else {
        bail!("usage: inkdown <file.md> [--json]");
    };

    let config = Config::load()
        .context("failed to load configuration")?
        .unwrap_or_default();
    let registry = registry_from(&config.features);
    let options = BlockOptions {
        tables: config.features.tables,
    };

    let (root, relative) = resolve(&file, &config)?;
    let doc = io::read_document_with(&root, &relative, &registry, &options)?;
    let tree = outline(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else {
        print_outline(&tree);
    }
    Ok(())
}

/// Splits the argument into a root directory and a path relative to it.
/// Relative arguments resolve against the configured docs path, falling back
/// to the current directory.
fn resolve(file: &str, config: &Config) -> Result<(PathBuf, RelativePathBuf)> {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        let name = path
            .file_name()
            .with_context(|| format!("not a file path: {file}"))?;
        let root = path
            .parent()
            .with_context(|| format!("not a file path: {file}"))?;
        Ok((
            root.to_path_buf(),
            RelativePathBuf::from(name.to_string_lossy().as_ref()),
        ))
    } else {
        let root = match &config.docs_path {
            Some(docs) => docs.clone(),
            None => env::current_dir().context("cannot determine current directory")?,
        };
        Ok((root, RelativePathBuf::from(file)))
    }
}

/// Mirrors the default registration order, skipping disabled constructs.
fn registry_from(features: &Features) -> ParserRegistry {
    let mut reg = ParserRegistry::new();
    if features.html_anchors {
        reg.register(Box::new(HtmlAnchorParser));
        reg.register(Box::new(LinkAnchorParser));
    }
    reg.register(Box::new(CodeSpanParser));
    if features.images {
        reg.register(Box::new(ImageParser));
    }
    reg.register(Box::new(LinkParser));
    reg.register(Box::new(BoldParser));
    reg.register(Box::new(ItalicParser));
    if features.strikethrough {
        reg.register(Box::new(StrikethroughParser));
    }
    reg.register(Box::new(LineBreakParser));
    reg
}

fn print_outline(tree: &DocumentOutline) {
    for block in &tree.blocks {
        print_block(block, 0);
    }
}

fn print_block(block: &BlockOutline, depth: usize) {
    let pad = "  ".repeat(depth);
    match block {
        BlockOutline::Heading { level, content } => {
            println!("{pad}{} {}", "#".repeat(usize::from(*level)), flatten(content));
        }
        BlockOutline::Paragraph { content } => println!("{pad}{}", flatten(content)),
        BlockOutline::Quote { children } => {
            for child in children {
                print!("{pad}> ");
                print_block(child, 0);
            }
        }
        BlockOutline::List {
            ordered,
            start,
            items,
        } => {
            for (i, item) in items.iter().enumerate() {
                if *ordered {
                    let n = start.unwrap_or(1) + i as u64;
                    println!("{pad}{n}. {}", flatten(item));
                } else {
                    println!("{pad}- {}", flatten(item));
                }
            }
        }
        BlockOutline::CodeBlock { lang, text, .. } => {
            println!("{pad}[code{}]", lang.as_deref().map_or(String::new(), |l| format!(" {l}")));
            for line in text.lines() {
                println!("{pad}  {line}");
            }
        }
        BlockOutline::Table { headers, rows } => {
            let cells: Vec<String> = headers.iter().map(|c| flatten(c)).collect();
            println!("{pad}{}", cells.join(" | "));
            for row in rows {
                let cells: Vec<String> = row.iter().map(|c| flatten(c)).collect();
                println!("{pad}{}", cells.join(" | "));
            }
        }
        BlockOutline::ThematicBreak => println!("{pad}---"),
    }
}

/// Plain-text projection of inline content.
fn flatten(content: &[InlineOutline]) -> String {
    let mut out = String::new();
    for element in content {
        match element {
            InlineOutline::Text { text } => out.push_str(text),
            InlineOutline::Bold { children }
            | InlineOutline::Italic { children }
            | InlineOutline::Strikethrough { children } => out.push_str(&flatten(children)),
            InlineOutline::Code { text } => {
                out.push('`');
                out.push_str(text);
                out.push('`');
            }
            InlineOutline::Link { children, url, .. } => {
                out.push_str(&flatten(children));
                out.push_str(&format!(" <{url}>"));
            }
            InlineOutline::Image { alt, url, .. } => {
                out.push_str(&format!("[image {alt} <{url}>]"));
            }
            InlineOutline::HtmlAnchor { inner, href } => {
                out.push_str(inner);
                if let Some(href) = href {
                    out.push_str(&format!(" <{href}>"));
                }
            }
            InlineOutline::LinkAnchor { raw, link } => match link {
                Some(link) => out.push_str(&format!("[{link}]")),
                None => out.push_str(raw),
            },
            InlineOutline::LineBreak => out.push(' '),
        }
    }
    out
}

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tracing::warn;

/// Extracts body paragraph text from a DOCX archive.
///
/// Blank paragraphs are dropped; the rest are joined with `\n` in document
/// order. Tables, headers, footers and embedded objects are not read.
pub fn extract_docx_text(bytes: &[u8]) -> String {
    let docx = match docx_rs::read_docx(bytes) {
        Ok(docx) => docx,
        Err(e) => {
            warn!("Failed to parse DOCX: {e}");
            return String::new();
        }
    };

    let paragraphs = docx.document.children.iter().filter_map(|child| match child {
        DocumentChild::Paragraph(para) => Some(paragraph_text(&para.children)),
        _ => None,
    });

    join_paragraphs(paragraphs).trim().to_string()
}

/// Joins non-blank paragraphs with newlines. Kept paragraphs are not trimmed.
pub fn join_paragraphs<I, S>(paragraphs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paragraphs
        .into_iter()
        .filter(|p| !p.as_ref().trim().is_empty())
        .map(|p| p.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => text.push_str(&paragraph_text(&link.children)),
            _ => {}
        }
    }
    text
}

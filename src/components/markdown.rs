use pulldown_cmark::{Event as MdEvent, Options, Parser, Tag};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::theme;

/// Convert a markdown fragment into styled lines.
///
/// Flat rendering tuned for README section bodies: paragraphs, nested
/// lists, inline emphasis and code. Block structure the sections never
/// contain (tables, footnotes) falls through as plain text.
pub fn markdown_text(raw: &str) -> Text<'static> {
    #[derive(Clone, Copy)]
    enum TagKind {
        Strong,
        Emphasis,
        Heading,
        List,
        Item,
        CodeBlock,
        Paragraph,
        Other,
    }

    let mut lines: Vec<Vec<Span>> = Vec::new();
    let mut current: Vec<Span> = Vec::new();
    let mut tag_stack: Vec<TagKind> = Vec::new();
    let mut list_start: Vec<Option<usize>> = Vec::new();
    let mut list_count: Vec<usize> = Vec::new();
    let mut bold = false;
    let mut italic = false;
    let mut in_code_block = false;

    for ev in Parser::new_ext(raw, Options::all()) {
        match ev {
            MdEvent::Start(tag) => match tag {
                Tag::Strong => {
                    tag_stack.push(TagKind::Strong);
                    bold = true;
                }
                Tag::Emphasis => {
                    tag_stack.push(TagKind::Emphasis);
                    italic = true;
                }
                Tag::Heading { .. } => {
                    tag_stack.push(TagKind::Heading);
                    bold = true;
                }
                Tag::List(start) => {
                    tag_stack.push(TagKind::List);
                    list_start.push(start.map(|n| n as usize));
                    list_count.push(0);
                }
                Tag::Item => {
                    tag_stack.push(TagKind::Item);
                    // a nested list opens before its parent item closes
                    if !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                    }
                    if let Some(last) = list_count.last_mut() {
                        *last = last.saturating_add(1);
                    }
                    let indent = "  ".repeat(list_count.len().saturating_sub(1));
                    let bullet = if let Some(start) = list_start.last().and_then(|s| *s) {
                        let idx = list_count.last().copied().unwrap_or(1);
                        format!("{}{}. ", indent, start + idx - 1)
                    } else {
                        format!("{}- ", indent)
                    };
                    current.push(Span::raw(bullet));
                }
                Tag::CodeBlock(_) => {
                    tag_stack.push(TagKind::CodeBlock);
                    in_code_block = true;
                }
                Tag::Paragraph => tag_stack.push(TagKind::Paragraph),
                _ => tag_stack.push(TagKind::Other),
            },
            MdEvent::End(_) => {
                if let Some(kind) = tag_stack.pop() {
                    match kind {
                        TagKind::Strong => bold = false,
                        TagKind::Emphasis => italic = false,
                        TagKind::Item => {
                            if !current.is_empty() {
                                lines.push(std::mem::take(&mut current));
                            }
                        }
                        TagKind::List => {
                            list_start.pop();
                            list_count.pop();
                            let in_parent_item =
                                tag_stack.iter().any(|k| matches!(k, TagKind::Item));
                            if !in_parent_item {
                                lines.push(vec![Span::raw("")]);
                            }
                        }
                        TagKind::CodeBlock => in_code_block = false,
                        TagKind::Paragraph => {
                            lines.push(std::mem::take(&mut current));
                            let in_item = tag_stack.iter().any(|k| matches!(k, TagKind::Item));
                            if !in_item {
                                lines.push(vec![Span::raw("")]);
                            }
                        }
                        TagKind::Heading => {
                            bold = false;
                            lines.push(std::mem::take(&mut current));
                            lines.push(vec![Span::raw("")]);
                        }
                        TagKind::Other => {}
                    }
                }
            }
            MdEvent::Text(text) => {
                let mut style = Style::default();
                if bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if italic {
                    style = style.add_modifier(Modifier::ITALIC);
                }
                if in_code_block {
                    style = Style::default().fg(theme::accent());
                }
                current.push(Span::styled(text.to_string(), style));
            }
            MdEvent::Code(text) => {
                current.push(Span::styled(
                    text.to_string(),
                    Style::default().fg(theme::accent()),
                ));
            }
            MdEvent::SoftBreak => {
                if in_code_block {
                    lines.push(std::mem::take(&mut current));
                } else {
                    current.push(Span::raw(" "));
                }
            }
            MdEvent::HardBreak => {
                lines.push(std::mem::take(&mut current));
            }
            MdEvent::Rule => {
                lines.push(vec![Span::raw("─")]);
            }
            _ => {}
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    // drop a single trailing blank line left by the last block
    if lines.last().is_some_and(|l| l.len() == 1 && l[0].content.is_empty()) {
        lines.pop();
    }

    Text::from(lines.into_iter().map(Line::from).collect::<Vec<_>>())
}

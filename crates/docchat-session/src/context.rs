//! Context assembly for LLM prompting.

use docchat_core::DocumentRecord;

/// Separator placed between document blocks.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Join documents into one labeled blob, in the given order.
///
/// Each document becomes `--- Document {n}: {name} ---\n{content}` with `n`
/// counted from 1. Returns `None` when there are no documents.
pub fn assemble<'a, I>(records: I) -> Option<String>
where
    I: IntoIterator<Item = &'a DocumentRecord>,
{
    let blocks: Vec<String> = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| format!("--- Document {}: {} ---\n{}", i + 1, record.name, record.content))
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join(BLOCK_SEPARATOR))
    }
}

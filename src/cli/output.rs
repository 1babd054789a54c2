//! Output formatting utilities

use crate::domain::Quote;

/// Format one page of a listing, header included
pub fn format_page<'a>(
    page: usize,
    page_size: usize,
    items: impl IntoIterator<Item = (usize, &'a Quote)>,
) -> String {
    let mut output = if page_size == 0 {
        "Showing all quotes in this Book of Quotes:\n".to_string()
    } else {
        format!(
            "Showing {} quotes from page {} in this Book of Quotes:\n",
            page_size, page
        )
    };
    output.push_str("  --- Quote --- | --- Author ---\n");

    for (index, quote) in items {
        output.push_str(&format!("{}. {}\n", index, quote));
    }
    output
}

/// Format search hits, numbered within the result set
pub fn format_search_results(needle: &str, quotes: &[&Quote]) -> String {
    if quotes.is_empty() {
        return format!("No results found with '{}'.", needle);
    }

    let mut output = format!("Results with '{}': \n", needle);
    for (i, quote) in quotes.iter().enumerate() {
        output.push_str(&format!("{}. '{}', {}\n", i + 1, quote.text, quote.author));
    }
    output
}

//! Card-style terminal rendering for nuggets, areas, and digests.

use lexnugget_core::{AreaOfLaw, CaseDigest, Nugget};
use lexnugget_ui::Pagination;

const RULE: &str = "────────────────────────────────────────";

/// Render one nugget as a card, mirroring the detail drawer: status,
/// citation with fallback, headline with fallback, quote, principle, and
/// tag chips.
pub fn nugget_card(nugget: &Nugget) {
    println!("{RULE}");
    print!("[{}] ", nugget.status_label());
    match nugget.display_citation() {
        Some(citation) => print!("{citation}"),
        None => print!("(no citation)"),
    }
    if let Some(year) = nugget.year {
        print!("  ({year})");
    }
    println!();

    println!("{}", nugget.headline());

    if let Some(judge) = &nugget.judge {
        match &nugget.judge_title {
            Some(title) => println!("— {} {title}", judge.fullname),
            None => println!("— {}", judge.fullname),
        }
    }
    if let Some(page) = nugget.page_number {
        println!("at page {page}");
    }

    if let Some(quote) = &nugget.quote {
        println!("\nQUOTE: {quote}");
    }
    println!("\nPRINCIPLE: {}", nugget.principle);

    let keywords: Vec<&str> = nugget.keyword_values().collect();
    if !keywords.is_empty() {
        println!("KEYWORDS: [{}]", keywords.join("] ["));
    }
    let areas: Vec<&str> = nugget.area_names().collect();
    if !areas.is_empty() {
        println!("AREA OF LAW: [{}]", areas.join("] ["));
    }
    if let Some(other) = &nugget.other_citations {
        println!("OTHER CITATIONS: {other}");
    }
}

pub fn area_row(area: &AreaOfLaw) {
    println!("  {:>5}  {}", area.id, area.display_name);
}

pub fn digest(digest: &CaseDigest) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&digest.0)?);
    Ok(())
}

/// Footer shown under multi-page lists.
pub fn page_footer(pagination: &Pagination) {
    println!("{RULE}");
    if pagination.is_multi_page() {
        println!(
            "page {} of {}  (use --page N to navigate)",
            pagination.current_page, pagination.total_pages
        );
    }
}

//! List categories with post counts

use anyhow::Result;

use crate::Folio;

/// Print every category and how many posts it holds
pub fn run(folio: &Folio) -> Result<()> {
    let index = folio.index()?;
    let categories = index.categories();

    println!("Categories ({}):", categories.len());
    for (category, count) in categories {
        println!("  {} ({})", category, count);
    }

    Ok(())
}

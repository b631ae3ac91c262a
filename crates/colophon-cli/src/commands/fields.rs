use anyhow::Result;

use colophon_core::repair_edition_fields;
use colophon_repair::{merge_candidates, run_repair, CatalogClient, FIELD_ISBN, FIELD_PUBLISHER};

pub async fn run_fields(client: &CatalogClient, limit: u32, dry_run: bool) -> Result<()> {
    log::info!("searching for editions with legacy isbn/publisher fields");

    let isbn_olids = client.query_editions(FIELD_ISBN, limit).await?;
    let publisher_olids = client.query_editions(FIELD_PUBLISHER, limit).await?;

    // A record can match both queries; visit it once.
    let olids = merge_candidates(isbn_olids, publisher_olids);
    println!("{} candidate editions", olids.len());

    let summary = run_repair(
        client,
        &olids,
        repair_edition_fields,
        "moving legacy isbn and publisher values into isbn_10/isbn_13/publishers",
        dry_run,
    )
    .await;

    println!("\n{summary}");
    Ok(())
}

use anyhow::Result;

use colophon_core::merge_identifier_key;
use colophon_repair::{identifier_field, run_repair, CatalogClient};

pub async fn run_identifiers(
    client: &CatalogClient,
    deprecated: &str,
    current: &str,
    limit: u32,
    dry_run: bool,
) -> Result<()> {
    log::info!("searching for editions with identifier key {deprecated:?}");

    let olids = client
        .query_editions(&identifier_field(deprecated), limit)
        .await?;
    println!("{} candidate editions", olids.len());

    let comment = format!("changing {deprecated} to {current}");
    let summary = run_repair(
        client,
        &olids,
        |record| {
            let mut repaired = record.clone();
            if let Some(ids) = &record.identifiers {
                repaired.identifiers = Some(merge_identifier_key(ids, deprecated, current));
            }
            Ok(repaired)
        },
        &comment,
        dry_run,
    )
    .await;

    println!("\n{summary}");
    Ok(())
}

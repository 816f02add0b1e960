use crate::cli::ImportArgs;
use crate::context::CliContext;
use crate::output;
use flashdeck_domain::import::import_into;
use flashdeck_persistence::JsonRowsImporter;

pub async fn handle(ctx: &mut CliContext, args: ImportArgs) -> anyhow::Result<()> {
    let importer = JsonRowsImporter::new();
    let added = import_into(&mut ctx.deck, &importer, &args.file).await?;
    ctx.save().await?;
    output::output_success(serde_json::json!({
        "imported": added,
        "total": ctx.deck.cards().len()
    }))
}

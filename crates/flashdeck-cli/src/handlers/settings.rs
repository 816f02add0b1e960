use crate::cli::{SettingsAction, SettingsSetArgs};
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &mut CliContext, action: SettingsAction) -> anyhow::Result<()> {
    match action {
        SettingsAction::Show => output::output_success(ctx.deck.settings()),
        SettingsAction::Set(args) => {
            apply(ctx, args);
            ctx.save().await?;
            output::output_success(ctx.deck.settings())
        }
    }
}

fn apply(ctx: &mut CliContext, args: SettingsSetArgs) {
    let mut settings = ctx.deck.settings().clone();
    if let Some(color) = args.panel_color {
        settings = settings.with_panel_color(color);
    }
    if let Some(color) = args.text_color {
        settings.text_color = color;
    }
    if let Some(family) = args.font_family {
        settings.font_family = family;
    }
    if let Some(size) = args.font_size {
        settings.font_size = size;
    }
    if let Some(opacity) = args.panel_opacity {
        settings.panel_opacity = opacity;
    }
    ctx.deck.update_settings(settings);
}

use crate::cli::{AddArgs, EditArgs, ListArgs};
use crate::context::CliContext;
use crate::output;
use anyhow::anyhow;
use flashdeck_core::DeckError;
use flashdeck_domain::{Card, CardId, EditorCommit, TagFilter};

pub fn handle_list(ctx: &mut CliContext, args: ListArgs) -> anyhow::Result<()> {
    if let Some(tag) = args.tag {
        ctx.deck.select_tag(TagFilter::parse(&tag));
    }
    let cards: Vec<Card> = ctx.deck.view().into_iter().cloned().collect();
    output::output_list(cards)
}

pub fn handle_tags(ctx: &CliContext) -> anyhow::Result<()> {
    let labels: Vec<String> = ctx
        .deck
        .available_tags()
        .iter()
        .map(|tag| tag.label().to_string())
        .collect();
    output::output_list(labels)
}

pub async fn handle_add(ctx: &mut CliContext, args: AddArgs) -> anyhow::Result<()> {
    let mut draft = ctx.deck.editor_for_create().initial_draft();
    draft.front = args.front;
    draft.back = args.back;
    if let Some(tag) = args.tag {
        draft.tag = tag;
    }
    if let Some(color) = args.color {
        draft.color = Some(color);
    }

    let id = ctx.deck.commit_editor(EditorCommit::create(draft))?;
    ctx.save().await?;
    output::output_success(find(ctx, &id)?)
}

pub async fn handle_edit(ctx: &mut CliContext, args: EditArgs) -> anyhow::Result<()> {
    let id = CardId::from(args.id);
    let request = ctx
        .deck
        .editor_for(&id)
        .ok_or_else(|| DeckError::NotFound(format!("Card {}", id)))?;

    let mut draft = request.initial_draft();
    if let Some(front) = args.front {
        draft.front = front;
    }
    if let Some(back) = args.back {
        draft.back = back;
    }
    if let Some(tag) = args.tag {
        draft.tag = tag;
    }
    if let Some(color) = args.color {
        draft.color = Some(color);
    }

    ctx.deck.commit_editor(EditorCommit::update(id.clone(), draft))?;
    ctx.save().await?;
    output::output_success(find(ctx, &id)?)
}

pub async fn handle_delete(ctx: &mut CliContext, id: String) -> anyhow::Result<()> {
    let id = CardId::from(id);
    match ctx.deck.delete_card(&id)? {
        Some(card) => {
            ctx.save().await?;
            output::output_success(serde_json::json!({ "deleted": card.id }))
        }
        None => output::output_error(&format!("Card not found: {}", id)),
    }
}

pub async fn handle_shuffle(ctx: &mut CliContext, seed: Option<u64>) -> anyhow::Result<()> {
    ctx.deck.shuffle(seed)?;
    ctx.save().await?;
    output::output_list(ctx.deck.cards().to_vec())
}

fn find(ctx: &CliContext, id: &CardId) -> anyhow::Result<Card> {
    ctx.deck
        .collection()
        .get(id)
        .cloned()
        .ok_or_else(|| anyhow!("Card {} vanished after saving", id))
}

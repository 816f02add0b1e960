use anyhow::bail;
use flashdeck_core::{AppConfig, Clock, MonotonicClock};
use flashdeck_domain::Deck;
use flashdeck_persistence::DeckStore;
use std::path::Path;

pub struct CliContext<C: Clock = MonotonicClock> {
    pub deck: Deck<C>,
    store: DeckStore,
}

impl CliContext {
    pub async fn load(data_dir: &Path, config: &AppConfig) -> Self {
        Self::load_with_clock(data_dir, config, MonotonicClock::new()).await
    }
}

impl<C: Clock> CliContext<C> {
    pub async fn load_with_clock(data_dir: &Path, config: &AppConfig, clock: C) -> Self {
        let store = DeckStore::new(data_dir);
        let deck = store.open(clock, config).await;
        tracing::debug!(
            "Loaded {} cards from {}",
            deck.cards().len(),
            data_dir.display()
        );
        Self { deck, store }
    }

    /// Persist pending changes. A dropped write is an error for the caller.
    pub async fn save(&mut self) -> anyhow::Result<()> {
        let pending = self.deck.pending_changes();
        let written = self.store.persist(&mut self.deck).await;
        if pending.cards && !written.cards {
            bail!("Failed to write cards to {}", self.store.data_dir().display());
        }
        if pending.settings && !written.settings {
            bail!(
                "Failed to write settings to {}",
                self.store.data_dir().display()
            );
        }
        Ok(())
    }
}

//! Application state wiring all components together.
//!
//! The core components are generic over store/provider/classifier traits;
//! AppState pins them to the concrete infra implementations and shares
//! them across handlers.

use std::path::PathBuf;
use std::sync::Arc;

use feeler_core::context::assembler::ContextAssembler;
use feeler_core::memory::digest::MemoryDigest;
use feeler_core::session::summarizer::SessionSummarizer;
use feeler_infra::config::{load_global_config, resolve_api_key};
use feeler_infra::emotion::lexicon::LexiconClassifier;
use feeler_infra::llm::openai_compat::OpenAiCompatibleProvider;
use feeler_infra::resolve_data_dir;
use feeler_infra::sqlite::pool::DatabasePool;
use feeler_infra::sqlite::summaries::SqliteSummaryStore;
use feeler_infra::sqlite::turns::SqliteTurnStore;

/// Concrete type aliases for the component generics pinned to infra
/// implementations.
pub type ConcreteAssembler =
    ContextAssembler<SqliteTurnStore, SqliteSummaryStore, LexiconClassifier>;

pub type ConcreteSummarizer =
    SessionSummarizer<SqliteTurnStore, SqliteSummaryStore, OpenAiCompatibleProvider>;

/// Shared application state holding the chat pipeline components.
#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<ConcreteAssembler>,
    pub summarizer: Arc<ConcreteSummarizer>,
    /// Generation provider used directly by the chat handler.
    pub provider: Arc<OpenAiCompatibleProvider>,
    /// Turn store used by the chat handler to persist the exchange.
    pub turns: Arc<SqliteTurnStore>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: connect to the database, load
    /// configuration, wire components.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_url = format!("sqlite://{}?mode=rwc", data_dir.join("feeler.db").display());
        let db_pool = DatabasePool::new(&db_url).await?;

        let config = load_global_config(&data_dir).await;
        let api_key = resolve_api_key(&config);

        // Components own their stores; pool clones are cheap handle copies.
        let assembler = ContextAssembler::new(
            SqliteTurnStore::new(db_pool.clone()),
            MemoryDigest::new(SqliteSummaryStore::new(db_pool.clone())),
            LexiconClassifier::new(),
        );

        let summarizer = SessionSummarizer::new(
            SqliteTurnStore::new(db_pool.clone()),
            SqliteSummaryStore::new(db_pool.clone()),
            OpenAiCompatibleProvider::new(&api_key, &config.base_url, &config.model),
        );

        let provider =
            OpenAiCompatibleProvider::new(&api_key, &config.base_url, &config.model);
        let turns = SqliteTurnStore::new(db_pool);

        Ok(Self {
            assembler: Arc::new(assembler),
            summarizer: Arc::new(summarizer),
            provider: Arc::new(provider),
            turns: Arc::new(turns),
            data_dir,
        })
    }
}

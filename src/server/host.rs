//! Server host holding the state behind every route
//!
//! The host owns the four collections, the registration desk of the
//! activities collection and the configuration they were built from. It is
//! transport-agnostic; the REST router and the `/api` dispatcher both read
//! from the same host.

use crate::config::{CampusConfig, StorageBackend};
use crate::core::collection::{Collection, RegistrationDesk};
use crate::core::entity::Record;
use crate::core::error::{CampusResult, ConfigError};
use crate::core::service::{CampusStore, RegistrationStore};
use crate::entities::{Activity, Event, NewsItem, Note};
use crate::storage::InMemoryStore;
use std::sync::Arc;

/// Host context containing all application state
///
/// # Example
///
/// ```rust,ignore
/// let host = CampusHost::in_memory(CampusConfig::default_config())?;
/// let app = ServerBuilder::new().with_host(host).build()?;
/// ```
pub struct CampusHost {
    pub config: Arc<CampusConfig>,
    pub news: Collection<NewsItem>,
    pub activities: Collection<Activity>,
    pub notes: Collection<Note>,
    pub events: Collection<Event>,
    pub registrations: RegistrationDesk,
}

/// Access to the collection holding `T`
pub trait HostsCollection<T: Record> {
    fn collection(&self) -> &Collection<T>;
}

macro_rules! hosts_collection {
    ($type:ty, $field:ident) => {
        impl HostsCollection<$type> for CampusHost {
            fn collection(&self) -> &Collection<$type> {
                &self.$field
            }
        }
    };
}

hosts_collection!(NewsItem, news);
hosts_collection!(Activity, activities);
hosts_collection!(Note, notes);
hosts_collection!(Event, events);

/// Stores backing one host
pub struct Stores {
    pub news: Arc<dyn CampusStore<NewsItem>>,
    pub activities: Arc<dyn CampusStore<Activity>>,
    pub notes: Arc<dyn CampusStore<Note>>,
    pub events: Arc<dyn CampusStore<Event>>,
    pub registrations: Arc<dyn RegistrationStore>,
}

impl Stores {
    pub fn in_memory() -> Self {
        let activities = Arc::new(InMemoryStore::<Activity>::new());
        Self {
            news: Arc::new(InMemoryStore::<NewsItem>::new()),
            activities: activities.clone(),
            notes: Arc::new(InMemoryStore::<Note>::new()),
            events: Arc::new(InMemoryStore::<Event>::new()),
            registrations: activities,
        }
    }

    #[cfg(feature = "mysql")]
    pub fn mysql(pool: sqlx::MySqlPool) -> Self {
        use crate::storage::MysqlStore;

        let activities = Arc::new(MysqlStore::<Activity>::new(pool.clone()));
        Self {
            news: Arc::new(MysqlStore::<NewsItem>::new(pool.clone())),
            activities: activities.clone(),
            notes: Arc::new(MysqlStore::<Note>::new(pool.clone())),
            events: Arc::new(MysqlStore::<Event>::new(pool)),
            registrations: activities,
        }
    }
}

impl CampusHost {
    /// Build the host from configuration and stores
    pub fn from_stores(config: CampusConfig, stores: Stores) -> CampusResult<Self> {
        config.validate()?;
        Ok(Self {
            news: Collection::new(stores.news, config.settings_for::<NewsItem>()?),
            activities: Collection::new(stores.activities, config.settings_for::<Activity>()?),
            notes: Collection::new(stores.notes, config.settings_for::<Note>()?),
            events: Collection::new(stores.events, config.settings_for::<Event>()?),
            registrations: RegistrationDesk::new(stores.registrations),
            config: Arc::new(config),
        })
    }

    /// Host over in-memory stores
    pub fn in_memory(config: CampusConfig) -> CampusResult<Self> {
        Self::from_stores(config, Stores::in_memory())
    }

    /// Host over the backend named in `config.storage`, seeded if requested
    pub async fn connect(config: CampusConfig) -> CampusResult<Self> {
        let seed = config.seed_sample_data;
        let host = match config.storage.backend {
            StorageBackend::InMemory => Self::in_memory(config)?,
            StorageBackend::Mysql => Self::connect_mysql(config).await?,
        };
        tracing::info!(
            backend = ?host.config.storage.backend,
            collections = host.config.collections.len(),
            "campus host ready"
        );
        if seed {
            crate::seed::seed_sample_data(&host).await?;
        }
        Ok(host)
    }

    #[cfg(feature = "mysql")]
    async fn connect_mysql(config: CampusConfig) -> CampusResult<Self> {
        use crate::storage::mysql::{connect, ensure_schema};

        let url = config
            .storage
            .url
            .clone()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "storage.url".to_string(),
                value: String::new(),
                message: "the mysql backend needs a connection url".to_string(),
            })?;
        let pool = connect(&url, config.storage.max_connections).await?;
        ensure_schema(&pool).await?;
        Self::from_stores(config, Stores::mysql(pool))
    }

    #[cfg(not(feature = "mysql"))]
    async fn connect_mysql(_config: CampusConfig) -> CampusResult<Self> {
        Err(ConfigError::InvalidValue {
            field: "storage.backend".to_string(),
            value: "mysql".to_string(),
            message: "built without the `mysql` feature".to_string(),
        }
        .into())
    }

    /// Collection holding `T`
    pub fn collection<T: Record>(&self) -> &Collection<T>
    where
        Self: HostsCollection<T>,
    {
        HostsCollection::<T>::collection(self)
    }
}

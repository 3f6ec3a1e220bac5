use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use secrecy::ExposeSecret;
use std::time::Duration;

use crate::{config::Config, errors::AppResult};

const APP_NAME: &str = "quiz-api";
const MIN_POOL_SIZE: u32 = 2;
const MAX_POOL_SIZE: u32 = 10;
const TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the quiz database. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct Database {
    client: Client,
    inner: mongodb::Database,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_options(client_options(config).await?)?;
        let database = Self {
            inner: client.database(&config.mongo_db_name),
            client,
        };

        database.health_check().await?;
        log::info!("Connected to MongoDB database '{}'", database.name());

        Ok(database)
    }

    /// A typed collection. mongodb requires `T: Send + Sync` for any collection.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.inner.collection(name)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    /// Drops the whole database, counters included.
    pub async fn drop_database(&self) -> AppResult<()> {
        log::warn!("Dropping MongoDB database '{}'", self.name());
        self.inner.drop().await?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }
}

async fn client_options(config: &Config) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(config.mongo_conn_string.expose_secret()).await?;

    options.app_name = Some(APP_NAME.to_string());
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.min_pool_size = Some(MIN_POOL_SIZE);
    options.max_pool_size = Some(MAX_POOL_SIZE);
    options.connect_timeout = Some(TIMEOUT);
    options.server_selection_timeout = Some(TIMEOUT);

    Ok(options)
}

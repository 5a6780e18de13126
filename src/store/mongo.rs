//! MongoDB 记录存储

use bson::doc;
use futures::future::BoxFuture;
use futures::FutureExt;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use super::RecordStore;
use crate::error::{DictionaryError, DictionaryResult};
use crate::types::Definition;
use crate::web::MongoConfig;

/// MongoDB 中存储的词典文档
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<bson::oid::ObjectId>,
    /// 规范化后的单词
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub usage1: Option<String>,
    #[serde(default)]
    pub usage2: Option<String>,
}

impl From<DictionaryDocument> for Definition {
    fn from(doc: DictionaryDocument) -> Self {
        Definition::new(
            doc.meaning,
            doc.usage1.unwrap_or_default(),
            doc.usage2.unwrap_or_default(),
        )
    }
}

/// 基于 MongoDB 集合的记录存储
#[derive(Clone)]
pub struct MongoRecordStore {
    collection: Collection<DictionaryDocument>,
}

impl MongoRecordStore {
    pub fn new(collection: Collection<DictionaryDocument>) -> Self {
        Self { collection }
    }

    /// 按配置连接 MongoDB
    pub async fn connect(config: &MongoConfig) -> DictionaryResult<Self> {
        let client = Client::with_uri_str(&config.connection_string)
            .await
            .map_err(|e| DictionaryError::Store(format!("连接 MongoDB 失败: {}", e)))?;

        let collection = client
            .database(&config.database_name)
            .collection::<DictionaryDocument>(&config.collection_name);

        tracing::info!(
            "MongoDB 连接成功: {}/{}",
            config.database_name,
            config.collection_name
        );
        Ok(Self::new(collection))
    }
}

impl RecordStore for MongoRecordStore {
    fn find_one<'a>(&'a self, word: &'a str) -> BoxFuture<'a, DictionaryResult<Option<Definition>>> {
        async move {
            let document = self
                .collection
                .find_one(doc! { "word": word })
                .await
                .map_err(|e| DictionaryError::Store(format!("查询数据库失败: {}", e)))?;

            Ok(document.map(Definition::from))
        }
        .boxed()
    }
}

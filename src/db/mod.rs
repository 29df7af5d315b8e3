//! MongoDB 연결 관리
//!
//! 맥주, 고객, 카테고리, 주문 컬렉션이 하나의 데이터베이스에 저장됩니다.
//! 드라이버의 연결 풀을 애플리케이션 전체에서 공유하며,
//! 리포지토리 매크로가 `db` 필드로 이 타입을 주입받습니다.
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"   # 기본값
//! export DATABASE_NAME="beer_service_dev"          # 기본값
//! ```
//!
//! ```rust,ignore
//! let database = Database::new().await?;
//! ServiceLocator::set(Arc::new(database));
//! ServiceLocator::initialize_all().await?;
//! ```

use std::env;
use std::time::Duration;
use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client};

/// 서버를 찾지 못하면 기동을 포기하는 시간
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// `MONGODB_URI`, `DATABASE_NAME` 환경 변수로 연결합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let uri = env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "beer_service_dev".to_string());

        Self::connect(&uri, &database_name).await
    }

    /// 주어진 URI로 연결한 뒤 `ping`으로 서버 가용성을 확인합니다.
    ///
    /// # Errors
    ///
    /// URI 파싱 실패, 또는 제한 시간 안에 서버에 닿지 못한 경우
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some("beer_service".to_string());
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options)?;
        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// 리포지토리가 컬렉션을 얻을 때 사용하는 데이터베이스 핸들
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}

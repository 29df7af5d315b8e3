//! # 샘플 데이터 초기화
//!
//! 레지스트리 초기화가 끝난 뒤 한 번 실행됩니다.
//!
//! 1. 맥주 컬렉션이 비어 있으면 기본 맥주 3종을 넣습니다.
//! 2. 맥주가 10개 미만이면 CSV 파일의 맥주를 추가로 넣습니다.
//! 3. 고객 컬렉션이 비어 있으면 기본 고객 3명을 넣습니다.
//! 4. 인덱스를 만들고 결과를 출력합니다.

use std::path::Path;
use std::sync::Arc;
use rust_decimal::Decimal;
use singleton_macro::service;
use crate::{
    config::BootstrapConfig,
    core::errors::{AppError, AppResult},
    domain::entities::{Beer, BeerStyle, Customer},
    repositories::{
        beers::BeerRepository,
        customers::CustomerRepository,
        orders::BeerOrderRepository,
    },
    services::beers::BeerCsvService,
    utils::display_terminal::print_bootstrap_summary,
};

/// CSV 적재를 건너뛰는 맥주 수 기준
const CSV_LOAD_THRESHOLD: u64 = 10;

/// 기본 맥주 (이름, 스타일, UPC, 가격, 재고)
const SAMPLE_BEERS: [(&str, BeerStyle, &str, i64, i32); 3] = [
    ("Lager Classic", BeerStyle::Lager, "12324", 5679, 10),
    ("Ale Classic", BeerStyle::Ale, "52462", 3479, 6),
    ("Pilsner Classic", BeerStyle::Pilsner, "1532", 7799, 12),
];

const SAMPLE_CUSTOMERS: [&str; 3] = ["Pan Oleg", "Pan Pavlo", "Old Zlishchev"];

pub fn sample_beers() -> Vec<Beer> {
    SAMPLE_BEERS
        .iter()
        .map(|(name, style, upc, cents, quantity)| {
            Beer::new(
                name.to_string(),
                *style,
                upc.to_string(),
                Decimal::new(*cents, 2),
                Some(*quantity),
            )
        })
        .collect()
}

pub fn sample_customers() -> Vec<Customer> {
    SAMPLE_CUSTOMERS
        .iter()
        .map(|name| Customer::new(name.to_string(), None))
        .collect()
}

#[service(name = "bootstrap")]
pub struct BootstrapService {
    beer_repo: Arc<BeerRepository>,
    customer_repo: Arc<CustomerRepository>,
    beer_order_repo: Arc<BeerOrderRepository>,
    beer_csv_service: Arc<BeerCsvService>,
}

impl BootstrapService {
    pub async fn run(&self) -> AppResult<()> {
        log::info!("🌱 샘플 데이터 확인 중...");

        self.load_beer_data().await?;
        self.load_csv_data(Path::new(&BootstrapConfig::csv_path())).await?;
        self.load_customer_data().await?;
        self.create_indexes().await?;

        let beers = self.beer_repo.count().await?;
        let customers = self.customer_repo.count().await?;
        print_bootstrap_summary(beers, customers);

        Ok(())
    }

    async fn load_beer_data(&self) -> AppResult<()> {
        if self.beer_repo.count().await? > 0 {
            return Ok(());
        }

        let inserted = self.beer_repo.create_many(&sample_beers()).await?;
        log::info!("🍺 기본 맥주 {}종 적재", inserted);

        Ok(())
    }

    /// CSV 파일이 없으면 경고만 남기고 건너뜁니다.
    async fn load_csv_data(&self, path: &Path) -> AppResult<()> {
        if self.beer_repo.count().await? >= CSV_LOAD_THRESHOLD {
            return Ok(());
        }

        let records = match self.beer_csv_service.convert_csv(path) {
            Ok(records) => records,
            Err(AppError::NotFound(msg)) => {
                log::warn!("⚠️ CSV 적재 건너뜀: {}", msg);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let beers: Vec<Beer> = records
            .iter()
            .map(|record| self.beer_csv_service.to_beer(record))
            .collect();

        let inserted = self.beer_repo.create_many(&beers).await?;
        log::info!("📄 CSV 맥주 {}종 적재 ({})", inserted, path.display());

        Ok(())
    }

    async fn load_customer_data(&self) -> AppResult<()> {
        if self.customer_repo.count().await? > 0 {
            return Ok(());
        }

        let inserted = self.customer_repo.create_many(&sample_customers()).await?;
        log::info!("👤 기본 고객 {}명 적재", inserted);

        Ok(())
    }

    async fn create_indexes(&self) -> AppResult<()> {
        self.beer_repo.create_indexes().await?;
        self.customer_repo.create_indexes().await?;
        self.beer_order_repo.create_indexes().await?;

        log::info!("✅ 인덱스 생성 완료");

        Ok(())
    }
}

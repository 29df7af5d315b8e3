//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! `#[service]`, `#[repository]` 매크로가 생성하는 등록 정보를 수집하고
//! 타입별 싱글톤 인스턴스를 관리합니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ #[service] 매크로 → ServiceRegistration 생성
//!    ├─ #[repository] 매크로 → RepositoryRegistration 생성
//!    └─ inventory::collect! → 전역 레지스트리에 등록
//!
//! 2. 런타임 초기화
//!    ├─ Database, RedisClient 를 ServiceLocator::set() 으로 직접 등록
//!    └─ ServiceLocator::initialize_all() 로 리포지토리 → 서비스 순서로 생성
//!
//! 3. 의존성 주입
//!    ├─ Arc<T> 필드 → ServiceLocator::get::<T>()
//!    ├─ 타입 이름에서 접미사 제거 (BeerOrderRepository → beerorder)
//!    └─ 등록 이름과 매칭 후 생성자 호출, 인스턴스 캐싱
//! ```
//!
//! ## 예제
//!
//! ```rust,ignore
//! #[repository(name = "customer", collection = "customers")]
//! pub struct CustomerRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! #[service(name = "customer")]
//! pub struct CustomerService {
//!     customer_repo: Arc<CustomerRepository>, // ServiceLocator::get::<CustomerRepository>()
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// 모든 `#[service]` 매크로가 적용된 구조체가 이 trait을 자동 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 등록 이름 (`{name}_service`)
    fn name(&self) -> &str;

    /// 서비스 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// 모든 `#[repository]` 매크로가 적용된 구조체가 이 trait을 자동 구현합니다.
/// 매크로가 생성하는 `cache_key()`는 이 trait의 `name()`을 사용하므로
/// 리포지토리 모듈에서는 이 trait을 `use` 해야 합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 등록 이름 (`{name}_repository`)
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
///
/// `#[service]` 매크로가 생성하고 `inventory`가 수집합니다.
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// 인스턴스 생성 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
///
/// `#[repository]` 매크로가 생성하고 `inventory`가 수집합니다.
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// 인스턴스 생성 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 서비스 이름 → 생성자 매핑 캐시
static SERVICE_NAME_CACHE: Lazy<HashMap<String, fn() -> Box<dyn Any + Send + Sync>>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (extract_clean_name_static(registration.name), registration.constructor))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

/// 리포지토리 이름 → 생성자 매핑 캐시
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, fn() -> Box<dyn Any + Send + Sync>>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (extract_clean_name_static(registration.name), registration.constructor))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록된 이름에서 접미사를 제거합니다.
///
/// `beer_service` → `beer`, `beerorder_repository` → `beerorder`
fn extract_clean_name_static(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 컴포넌트 종류
#[derive(Debug, Clone, Copy, PartialEq)]
enum ComponentKind {
    Repository,
    Service,
}

impl ComponentKind {
    fn suffix(&self) -> &'static str {
        match self {
            ComponentKind::Repository => "Repository",
            ComponentKind::Service => "Service",
        }
    }

    /// 타입 이름으로 종류와 레지스트리 키를 결정합니다.
    ///
    /// `BeerOrderRepository` → `(Repository, "beerorder")`
    fn classify(clean_type_name: &str) -> Option<(Self, String)> {
        [ComponentKind::Repository, ComponentKind::Service]
            .into_iter()
            .find(|kind| clean_type_name.contains(kind.suffix()))
            .map(|kind| {
                let key = clean_type_name
                    .strip_suffix(kind.suffix())
                    .unwrap_or(clean_type_name)
                    .to_lowercase();
                (kind, key)
            })
    }

    fn constructor(&self, key: &str) -> Option<fn() -> Box<dyn Any + Send + Sync>> {
        match self {
            ComponentKind::Repository => REPOSITORY_NAME_CACHE.get(key).copied(),
            ComponentKind::Service => SERVICE_NAME_CACHE.get(key).copied(),
        }
    }
}

/// 싱글톤 의존성 주입 컨테이너
///
/// - **싱글톤 보장**: 각 타입당 정확히 하나의 인스턴스
/// - **지연 초기화**: 첫 요청 시점에 인스턴스 생성
/// - **순환 참조 감지**: 초기화 중인 타입을 추적
pub struct ServiceLocator {
    /// `TypeId`별 생성된 인스턴스
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 현재 초기화 중인 타입들
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 1. 캐시된 인스턴스가 있으면 반환
    /// 2. 초기화 중인 타입이면 순환 참조로 패닉
    /// 3. 타입 이름에서 레지스트리 키를 만들어 생성자 호출
    /// 4. 생성된 인스턴스를 캐싱
    ///
    /// # 패닉
    ///
    /// 등록되지 않은 타입, 순환 참조, 타입 불일치는 설정 오류이므로
    /// 애플리케이션 시작 시점에 패닉으로 드러납니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::cached::<T>(type_id) {
            return instance;
        }

        {
            let mut initializing = LOCATOR.initializing.write().unwrap_or_else(|e| e.into_inner());
            if !initializing.insert(type_id) {
                eprintln!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        let result = std::panic::catch_unwind(|| Self::create::<T>(type_id, type_name));

        LOCATOR.initializing
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&type_id);

        match result {
            Ok(instance) => instance,
            Err(e) => {
                eprintln!("ERROR: Failed to create instance for {}: {:?}", type_name, e);
                panic!("Failed to create instance for {}", type_name);
            }
        }
    }

    fn cached<T: 'static + Send + Sync>(type_id: TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(|e| e.into_inner());
        instances
            .get(&type_id)
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    fn create<T: 'static + Send + Sync>(type_id: TypeId, type_name: &str) -> Arc<T> {
        let clean_type_name = Self::extract_clean_type_name(type_name);

        let Some((kind, key)) = ComponentKind::classify(&clean_type_name) else {
            panic!("Service not found: {}. Make sure it's registered with #[service] or #[repository] macro, or manually registered with ServiceLocator::set()", type_name);
        };

        let Some(constructor) = kind.constructor(&key) else {
            panic!("No {:?} found for entity: {}", kind, key);
        };

        // 생성자는 내부에서 다른 의존성을 get() 하므로 쓰기 잠금 밖에서 호출
        let boxed_instance = constructor();
        let Ok(arc_instance) = boxed_instance.downcast::<Arc<T>>() else {
            panic!("Type mismatch for {:?}: {}", kind, key);
        };

        let instance = (*arc_instance).clone();
        LOCATOR.instances
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(type_id)
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>);
        instance
    }

    /// 전체 모듈 경로에서 타입 이름만 추출합니다.
    ///
    /// `beer_service_backend::services::beers::BeerService` → `BeerService`
    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 매크로로 관리되지 않는 인프라 컴포넌트(`Database`, `RedisClient`)를
    /// `initialize_all()` 이전에 등록할 때 사용합니다.
    ///
    /// ```rust,ignore
    /// ServiceLocator::set(Arc::new(Database::new().await?));
    /// ServiceLocator::set(Arc::new(RedisClient::new().await?));
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        log::info!("📦 Registering: {}", clean_name);

        LOCATOR.instances
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 데이터 계층이 먼저 생성되도록 리포지토리 → 서비스 순으로 진행합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

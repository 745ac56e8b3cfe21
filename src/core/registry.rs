//! # Service Registry
//!
//! 싱글톤 서비스와 리포지토리를 보관하는 전역 컨테이너입니다.
//!
//! `#[service]` / `#[repository]` 매크로는 컴파일 타임에 `inventory`로
//! 생성자를 등록하고, [`ServiceLocator::get`]은 타입 이름에서 엔티티 이름을
//! 추출해 해당 생성자를 찾아 인스턴스를 한 번만 생성합니다.
//!
//! 인프라 컴포넌트(`Database`, `RedisClient`)는 매크로로 만들 수 없으므로
//! `main`에서 [`ServiceLocator::set`]으로 직접 등록합니다.
//!
//! ```rust,ignore
//! ServiceLocator::set(Arc::new(Database::new().await?));
//! ServiceLocator::set(Arc::new(RedisClient::new().await?));
//! ServiceLocator::initialize_all().await?;
//!
//! let service = RegistrationService::instance();
//! ```
//!
//! ## 이름 규칙
//!
//! `RequestRepository` → `request`, `ArchiveService` → `archive` 처럼
//! 접미사를 떼고 소문자로 바꾼 이름이 매크로의 `name`과 같아야 합니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;

/// `#[service]` 매크로가 구현하는 서비스 trait
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[repository]` 매크로가 구현하는 리포지토리 trait
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;
    fn collection_name(&self) -> &str;
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 생성자 등록 정보
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 생성자 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (registration_key(registration.name), registration))
        .collect();
    debug!("서비스 이름 캐시 초기화: {}개", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (registration_key(registration.name), registration))
        .collect();
    debug!("리포지토리 이름 캐시 초기화: {}개", cache.len());
    cache
});

/// 등록 이름에서 `_service` / `_repository` 접미사를 제거합니다.
fn registration_key(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 타입 경로의 마지막 세그먼트 (`crate::a::FooService` → `FooService`)
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 타입 이름에서 조회 키를 만듭니다 (`ArchiveRepository` → `archive`).
fn lookup_key(short_name: &str, suffix: &str) -> Option<String> {
    short_name.strip_suffix(suffix).map(|entity| entity.to_lowercase())
}

/// 전역 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
    initializing: RwLock::new(HashSet::new()),
});

impl ServiceLocator {
    /// 타입 `T`의 싱글톤을 반환합니다. 없으면 등록된 생성자로 만듭니다.
    ///
    /// # Panics
    ///
    /// * 등록되지 않은 타입을 요청한 경우
    /// * 순환 의존성이 감지된 경우
    ///
    /// 두 경우 모두 서버 기동 시점의 배선 오류이므로 즉시 중단합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::lookup::<T>(type_id) {
            return instance;
        }

        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            if !initializing.insert(type_id) {
                panic!("순환 의존성 감지: {} 는 이미 초기화 중입니다", type_name);
            }
        }

        let instance = Self::construct::<T>(type_name);

        LOCATOR.initializing.write().unwrap().remove(&type_id);
        LOCATOR
            .instances
            .write()
            .unwrap()
            .entry(type_id)
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
            .clone()
            .downcast::<T>()
            .expect("Type mismatch in ServiceLocator")
    }

    fn lookup<T: 'static + Send + Sync>(type_id: TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap();
        instances
            .get(&type_id)
            .map(|instance| instance.clone().downcast::<T>().expect("Type mismatch in ServiceLocator"))
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let short_name = short_type_name(type_name);

        let constructor = if let Some(key) = lookup_key(short_name, "Repository") {
            REPOSITORY_NAME_CACHE.get(&key).map(|r| r.constructor)
        } else if let Some(key) = lookup_key(short_name, "Service") {
            SERVICE_NAME_CACHE.get(&key).map(|r| r.constructor)
        } else {
            None
        };

        let constructor = constructor.unwrap_or_else(|| {
            panic!(
                "등록되지 않은 컴포넌트: {}. #[service]/#[repository] 매크로 또는 ServiceLocator::set()으로 등록하세요",
                type_name
            )
        });

        match constructor().downcast::<Arc<T>>() {
            Ok(instance) => *instance,
            Err(_) => panic!("컴포넌트 타입 불일치: {}", type_name),
        }
    }

    /// 인스턴스를 직접 등록합니다. 같은 타입이 이미 있으면 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        info!("📦 등록: {}", short_type_name(type_name));

        LOCATOR
            .instances
            .write()
            .unwrap()
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저 만든 뒤 서비스를 만들어, 배선 오류가 첫 요청이
    /// 아닌 서버 기동 시점에 드러나도록 합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        info!("🔄 서비스 레지스트리 초기화");

        let mut repo_count = 0;
        for registration in inventory::iter::<RepositoryRegistration>() {
            let _instance = (registration.constructor)();
            debug!("  ✓ repository {}", registration.name);
            repo_count += 1;
        }

        let mut service_count = 0;
        for registration in inventory::iter::<ServiceRegistration>() {
            let _instance = (registration.constructor)();
            debug!("  ✓ service {}", registration.name);
            service_count += 1;
        }

        info!(
            "✅ 레지스트리 준비 완료: 리포지토리 {}개, 서비스 {}개",
            repo_count, service_count
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_key_strips_suffix() {
        assert_eq!(registration_key("archive_service"), "archive");
        assert_eq!(registration_key("request_repository"), "request");
        assert_eq!(registration_key("profile"), "profile");
    }

    #[test]
    fn test_lookup_key_from_type_name() {
        let short = short_type_name("carshare_backend::repositories::archives::ArchiveRepository");

        assert_eq!(short, "ArchiveRepository");
        assert_eq!(lookup_key(short, "Repository"), Some("archive".to_string()));
        assert_eq!(lookup_key(short, "Service"), None);
    }

    #[test]
    fn test_set_then_get_returns_same_instance() {
        struct PlainComponent(u32);

        let component = Arc::new(PlainComponent(7));
        ServiceLocator::set(component.clone());

        let resolved = ServiceLocator::get::<PlainComponent>();
        assert!(Arc::ptr_eq(&component, &resolved));
        assert_eq!(resolved.0, 7);
    }
}

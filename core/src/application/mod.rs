use crate::{
    domain::common::{LibrisConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        author::MemoryAuthorRepository, book::MemoryBookRepository,
        comment::MemoryCommentRepository, member::MemoryMemberRepository, memory::MemoryStore,
        post::MemoryPostRepository,
    },
};

pub type LibrisService = Service<
    MemoryAuthorRepository,
    MemoryBookRepository,
    MemoryCommentRepository,
    MemoryMemberRepository,
    MemoryPostRepository,
>;

pub async fn create_service(config: LibrisConfig) -> Result<LibrisService, CoreError> {
    let store = MemoryStore::from_fixture(config.fixtures_path.as_deref()).await?;

    Ok(create_service_with_store(store, config))
}

pub fn create_service_with_store(store: MemoryStore, config: LibrisConfig) -> LibrisService {
    Service::new(
        MemoryAuthorRepository::new(store.clone()),
        MemoryBookRepository::new(store.clone()),
        MemoryCommentRepository::new(store.clone()),
        MemoryMemberRepository::new(store.clone()),
        MemoryPostRepository::new(store),
        config,
    )
}

#[cfg(test)]
pub(crate) fn test_service() -> LibrisService {
    test_service_with_config(LibrisConfig::default())
}

#[cfg(test)]
pub(crate) fn test_service_with_config(config: LibrisConfig) -> LibrisService {
    let store = MemoryStore::builtin().expect("built-in fixture is valid");
    create_service_with_store(store, config)
}

use uuid::Uuid;

use crate::domain::{
    author::{
        entities::{Author, AuthorDetail, AuthorOverview, AuthorStatistics},
        value_objects::CreateAuthorInput,
    },
    common::entities::app_errors::CoreError,
    query::{Page, QueryParams},
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthorService: Send + Sync {
    fn list_authors(
        &self,
        params: QueryParams,
    ) -> impl Future<Output = Result<Page<AuthorOverview>, CoreError>> + Send;

    fn get_author(
        &self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<AuthorDetail, CoreError>> + Send;

    fn create_author(
        &self,
        input: CreateAuthorInput,
    ) -> impl Future<Output = Result<Author, CoreError>> + Send;

    fn author_statistics(&self)
    -> impl Future<Output = Result<AuthorStatistics, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthorRepository: Send + Sync {
    fn list_authors(&self) -> impl Future<Output = Result<Vec<Author>, CoreError>> + Send;

    fn get_author_by_id(
        &self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<Option<Author>, CoreError>> + Send;

    fn create_author(&self, author: Author)
    -> impl Future<Output = Result<Author, CoreError>> + Send;
}

use qa_db::error::DatabaseError;
use qa_db::model::Model;
use qa_db::service::QaService;

/// Fetch `M` by id, turning a miss into `NotFound`.
pub async fn require<M: Model>(service: &QaService, id: i64) -> anyhow::Result<M> {
    service
        .find_by_id::<M>(id)
        .await?
        .ok_or_else(|| {
            DatabaseError::NotFound {
                entity_type: M::ENTITY,
                id: Some(id),
            }
            .into()
        })
}

//! SeaORM implementation of ComplianceRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{
    ComplianceRecord, ComplianceRepository, ComplianceStatus, DomainError, NewComplianceRecord,
};
use crate::models::compliance_record::{self, ActiveModel, Entity as ComplianceRecordEntity};

/// SeaORM-based implementation of ComplianceRepository
pub struct SeaOrmComplianceRepository {
    db: DatabaseConnection,
}

impl SeaOrmComplianceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: compliance_record::Model) -> Result<ComplianceRecord, DomainError> {
    let status = ComplianceStatus::parse(&model.status).ok_or_else(|| {
        DomainError::Internal(format!(
            "Unknown status '{}' on compliance record {}",
            model.status, model.id
        ))
    })?;

    Ok(ComplianceRecord {
        id: model.id,
        supplier_id: model.supplier_id,
        metric: model.metric,
        result: model.result,
        date_recorded: model.date_recorded,
        status,
        insights: model.insights,
    })
}

#[async_trait]
impl ComplianceRepository for SeaOrmComplianceRepository {
    async fn create_pending(
        &self,
        input: NewComplianceRecord,
    ) -> Result<ComplianceRecord, DomainError> {
        let record = ActiveModel {
            supplier_id: Set(input.supplier_id),
            metric: Set(input.metric),
            result: Set(input.result),
            date_recorded: Set(input.date_recorded),
            status: Set(ComplianceStatus::PendingAnalysis.as_str().to_string()),
            insights: Set(None),
            ..Default::default()
        };

        let result = record.insert(&self.db).await?;

        to_domain(result)
    }

    async fn mark_analyzed(
        &self,
        id: i32,
        insights: String,
    ) -> Result<ComplianceRecord, DomainError> {
        let existing = ComplianceRecordEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::NotFound("Compliance record not found".to_string()))?;

        let mut record: ActiveModel = existing.into();
        record.status = Set(ComplianceStatus::Analyzed.as_str().to_string());
        record.insights = Set(Some(insights));

        let result = record.update(&self.db).await?;

        to_domain(result)
    }

    async fn find_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<Vec<ComplianceRecord>, DomainError> {
        let records = ComplianceRecordEntity::find()
            .filter(compliance_record::Column::SupplierId.eq(supplier_id))
            .order_by_asc(compliance_record::Column::Id)
            .all(&self.db)
            .await?;

        records.into_iter().map(to_domain).collect()
    }
}

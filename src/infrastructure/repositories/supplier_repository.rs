//! SeaORM implementation of SupplierRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{ContractTerms, DomainError, NewSupplier, Supplier, SupplierRepository};
use crate::models::supplier::{self, ActiveModel, Entity as SupplierEntity};

/// SeaORM-based implementation of SupplierRepository
pub struct SeaOrmSupplierRepository {
    db: DatabaseConnection,
}

impl SeaOrmSupplierRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: supplier::Model) -> Result<Supplier, DomainError> {
    let contract_terms = model
        .contract_terms
        .as_deref()
        .map(serde_json::from_str::<ContractTerms>)
        .transpose()
        .map_err(|e| {
            DomainError::Internal(format!(
                "Stored contract terms for supplier {} are not a JSON object: {}",
                model.id, e
            ))
        })?;

    Ok(Supplier {
        id: model.id,
        name: model.name,
        country: model.country,
        contract_terms,
        compliance_score: model.compliance_score,
        last_audit: model.last_audit,
    })
}

#[async_trait]
impl SupplierRepository for SeaOrmSupplierRepository {
    async fn find_all(&self) -> Result<Vec<Supplier>, DomainError> {
        let suppliers = SupplierEntity::find()
            .order_by_asc(supplier::Column::Id)
            .all(&self.db)
            .await?;

        suppliers.into_iter().map(to_domain).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Supplier>, DomainError> {
        let supplier = SupplierEntity::find_by_id(id).one(&self.db).await?;

        supplier.map(to_domain).transpose()
    }

    async fn create(&self, input: NewSupplier) -> Result<Supplier, DomainError> {
        let contract_terms = input
            .contract_terms
            .map(|terms| serde_json::Value::Object(terms).to_string());

        let supplier = ActiveModel {
            name: Set(input.name),
            country: Set(input.country),
            contract_terms: Set(contract_terms),
            compliance_score: Set(input.compliance_score),
            last_audit: Set(input.last_audit),
            ..Default::default()
        };

        let result = supplier.insert(&self.db).await?;

        to_domain(result)
    }
}

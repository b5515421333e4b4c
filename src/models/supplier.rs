use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub country: String,
    pub contract_terms: Option<String>, // JSON object
    pub compliance_score: Option<i32>,
    pub last_audit: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::compliance_record::Entity")]
    ComplianceRecords,
}

impl Related<super::compliance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComplianceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A persisted employee. Serialized in camelCase to match the REST surface.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_keys() {
        let model = Model {
            id: 7,
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@example.com".into(),
        };
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "firstName": "John",
                "lastName": "Doe",
                "email": "john.doe@example.com",
            })
        );
    }
}

//! Record ↔ DTO conversions
//!
//! Explicit field-by-field copies for every persistence/transfer pair.
//! The field sets are static, so no reflection or derive machinery is
//! involved; what the API exposes is exactly what these functions copy.

use mydiet_shared::types::{DietDto, MealDto, PatientDto, ProductCategoryDto, ProductDto};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::repositories::{
    DietGraph, DietRecord, DietWithPatient, MealInput, MealRecord, PatientInput, PatientRecord,
    ProductCategoryRecord, ProductInput, ProductRecord, ProductWithCategoryRecord,
};

/// Convert a patient record to its DTO, without weight history (weight 0).
pub fn patient_to_dto(record: &PatientRecord) -> PatientDto {
    PatientDto {
        id: record.id,
        fiscal_code: record.fiscal_code.clone(),
        name: record.name.clone(),
        surname: record.surname.clone(),
        email: record.email.clone(),
        age: record.age,
        gender: record.gender.clone(),
        phone: record.phone.clone(),
        weight: 0.0,
        diet_id: record.diet_id,
    }
}

/// Convert a patient record to its DTO carrying the latest weight value.
pub fn patient_to_dto_with_weight(record: &PatientRecord, weight: Decimal) -> PatientDto {
    let mut dto = patient_to_dto(record);
    dto.weight = decimal_to_f64(weight);
    dto
}

/// Build a whole-row patient input from a DTO.
pub fn patient_input_from_dto(dto: &PatientDto) -> PatientInput {
    PatientInput {
        fiscal_code: dto.fiscal_code.clone(),
        name: dto.name.clone(),
        surname: dto.surname.clone(),
        email: dto.email.clone(),
        age: dto.age,
        gender: dto.gender.clone(),
        phone: dto.phone.clone(),
        diet_id: dto.diet_id,
    }
}

/// Convert a diet record plus its owning patient to a DTO.
pub fn diet_to_dto(record: &DietWithPatient) -> DietDto {
    DietDto {
        id: record.diet.id,
        name: record.diet.name.clone(),
        description: record.diet.description.clone(),
        patient: record.patient.as_ref().map(patient_to_dto),
        meals: Vec::new(),
    }
}

/// Convert a bare diet record to a DTO with no associations attached.
pub fn diet_record_to_dto(record: &DietRecord) -> DietDto {
    DietDto {
        id: record.id,
        name: record.name.clone(),
        description: record.description.clone(),
        patient: None,
        meals: Vec::new(),
    }
}

/// Convert a full diet graph (meals and their products) to a DTO.
pub fn diet_graph_to_dto(graph: &DietGraph) -> DietDto {
    DietDto {
        id: graph.diet.id,
        name: graph.diet.name.clone(),
        description: graph.diet.description.clone(),
        patient: graph.patient.as_ref().map(patient_to_dto),
        meals: graph
            .meals
            .iter()
            .map(|(meal, products)| {
                let mut dto = meal_to_dto(meal);
                dto.products = products.iter().map(product_record_to_dto).collect();
                dto
            })
            .collect(),
    }
}

/// Convert a meal record to its DTO.
pub fn meal_to_dto(record: &MealRecord) -> MealDto {
    MealDto {
        id: record.id,
        name: record.name.clone(),
        description: record.description.clone(),
        products: Vec::new(),
    }
}

/// Build a meal input from a DTO.
pub fn meal_input_from_dto(dto: &MealDto) -> MealInput {
    MealInput {
        name: dto.name.clone(),
        description: dto.description.clone(),
    }
}

/// Convert a product row joined with its category to a DTO.
pub fn product_to_dto(record: &ProductWithCategoryRecord) -> ProductDto {
    ProductDto {
        id: record.id,
        name: record.name.clone(),
        description: record.description.clone(),
        product_category: Some(ProductCategoryDto {
            id: record.product_category_id,
            description: record.category_description.clone(),
        }),
    }
}

/// Convert a bare product record to a DTO; the category is not loaded.
pub fn product_record_to_dto(record: &ProductRecord) -> ProductDto {
    ProductDto {
        id: record.id,
        name: record.name.clone(),
        description: record.description.clone(),
        product_category: None,
    }
}

/// Build a product input from a DTO. `None` when the DTO carries no
/// category, which every persisted product must have.
pub fn product_input_from_dto(dto: &ProductDto) -> Option<ProductInput> {
    let category = dto.product_category.as_ref()?;
    Some(ProductInput {
        name: dto.name.clone(),
        description: dto.description.clone(),
        product_category_id: category.id,
    })
}

/// Convert a product category record to its DTO.
pub fn category_to_dto(record: &ProductCategoryRecord) -> ProductCategoryDto {
    ProductCategoryDto {
        id: record.id,
        description: record.description.clone(),
    }
}

fn decimal_to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient_record() -> PatientRecord {
        PatientRecord {
            id: 3,
            fiscal_code: "FC1".to_string(),
            name: "Mario".to_string(),
            surname: "Rossi".to_string(),
            email: "mario.rossi@example.com".to_string(),
            age: 42,
            gender: "M".to_string(),
            phone: "3331234567".to_string(),
            diet_id: Some(9),
        }
    }

    #[test]
    fn patient_round_trip_preserves_fields() {
        let record = patient_record();
        let dto = patient_to_dto_with_weight(&record, Decimal::new(705, 1));
        assert_eq!(dto.id, 3);
        assert_eq!(dto.weight, 70.5);
        assert_eq!(dto.diet_id, Some(9));

        let input = patient_input_from_dto(&dto);
        assert_eq!(input.fiscal_code, record.fiscal_code);
        assert_eq!(input.email, record.email);
        assert_eq!(input.diet_id, record.diet_id);
    }

    #[test]
    fn diet_graph_maps_meals_and_products() {
        let graph = DietGraph {
            diet: DietRecord {
                id: 1,
                name: "D1".to_string(),
                description: "Low carb".to_string(),
            },
            patient: Some(patient_record()),
            meals: vec![(
                MealRecord {
                    id: 2,
                    name: "Breakfast".to_string(),
                    description: "Morning meal".to_string(),
                },
                vec![ProductRecord {
                    id: 4,
                    name: "Oats".to_string(),
                    description: "Rolled oats".to_string(),
                    product_category_id: 5,
                }],
            )],
        };

        let dto = diet_graph_to_dto(&graph);
        assert_eq!(dto.meals.len(), 1);
        assert_eq!(dto.meals[0].products.len(), 1);
        assert_eq!(dto.meals[0].products[0].name, "Oats");
        assert_eq!(dto.patient.as_ref().unwrap().id, 3);
    }

    #[test]
    fn product_input_requires_category() {
        let dto = ProductDto {
            id: 0,
            name: "Oats".to_string(),
            description: "Rolled oats".to_string(),
            product_category: None,
        };
        assert!(product_input_from_dto(&dto).is_none());

        let with_category = ProductDto {
            product_category: Some(ProductCategoryDto {
                id: 5,
                description: "Cereals".to_string(),
            }),
            ..dto
        };
        let input = product_input_from_dto(&with_category).unwrap();
        assert_eq!(input.product_category_id, 5);
    }
}

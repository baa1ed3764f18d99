use super::*;
use serde_json::json;

#[test]
fn car_deserializes_api_record() {
    let car: Car = serde_json::from_value(json!({
        "id": 1,
        "make": "Toyota",
        "model": "Camry",
        "year": 2022,
        "color": "Blue",
        "price": 25000.0,
        "available": true
    }))
    .unwrap();
    assert_eq!(car.id, 1);
    assert_eq!(car.make, "Toyota");
    assert_eq!(car.year, 2022);
    assert!((car.price - 25000.0).abs() < f64::EPSILON);
    assert!(car.available);
}

#[test]
fn car_accepts_integer_price_and_missing_availability() {
    let car: Car = serde_json::from_value(json!({
        "id": 4,
        "make": "Tesla",
        "model": "Model 3",
        "year": 2023,
        "color": "White",
        "price": 45000
    }))
    .unwrap();
    assert!((car.price - 45000.0).abs() < f64::EPSILON);
    assert!(car.available);
}

#[test]
fn car_update_reserve_serializes_only_availability() {
    let body = serde_json::to_value(CarUpdate::reserve()).unwrap();
    assert_eq!(body, json!({ "available": false }));
}

#[test]
fn car_update_from_new_car_carries_every_field() {
    let update = CarUpdate::from(NewCar {
        make: "Ford".to_owned(),
        model: "Mustang".to_owned(),
        year: 2021,
        color: "Black".to_owned(),
        price: 35000.0,
        available: false,
    });
    let body = serde_json::to_value(update).unwrap();
    assert_eq!(
        body,
        json!({
            "make": "Ford",
            "model": "Mustang",
            "year": 2021,
            "color": "Black",
            "price": 35000.0,
            "available": false
        })
    );
}

#[test]
fn login_response_reads_token_and_admin_flag() {
    let resp: LoginResponse = serde_json::from_value(json!({
        "message": "Login successful",
        "access_token": "t1",
        "is_admin": true
    }))
    .unwrap();
    assert_eq!(resp, LoginResponse { access_token: "t1".to_owned(), is_admin: true });
}

#[test]
fn current_user_defaults_missing_fields() {
    let user: CurrentUser = serde_json::from_value(json!({ "is_admin": false })).unwrap();
    assert_eq!(user.id, 0);
    assert!(user.username.is_empty());
    assert!(!user.is_admin);
}

#[test]
fn created_car_reads_id_and_message() {
    let created: CreatedCar =
        serde_json::from_value(json!({ "message": "Car added successfully", "id": 6 })).unwrap();
    assert_eq!(created.id, 6);
    assert_eq!(created.message.as_deref(), Some("Car added successfully"));
}

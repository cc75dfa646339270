use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_database::store::{APPOINTMENTS_FILE, INSURANCES_FILE, PATIENTS_FILE};
use shared_database::{ClinicData, ClinicStore};

pub struct TestConfig {
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl TestConfig {
    pub fn with_dirs(data_dir: &Path, static_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            static_dir: static_dir.to_path_buf(),
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            data_dir: self.data_dir.clone(),
            static_dir: self.static_dir.clone(),
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Raw seed records shaped like the files under `data/`.
pub struct MockSeedRecords;

impl MockSeedRecords {
    pub fn patient(id: i64, first_name: &str, last_name: &str) -> Value {
        json!({
            "id": id,
            "first_name": first_name,
            "last_name": last_name,
            "dob": "1985-03-14",
            "email": format!("{}.{}@example.com", first_name.to_lowercase(), last_name.to_lowercase()),
            "phone": "555-0100",
            "gender": "F"
        })
    }

    pub fn available_slot(id: i64) -> Value {
        json!({
            "id": id,
            "status": "available",
            "patient_id": null
        })
    }

    pub fn booked_slot(id: i64, patient_id: i64) -> Value {
        json!({
            "id": id,
            "status": "booked",
            "patient_id": patient_id
        })
    }

    pub fn eligible_plan(payer: &str, plan: &str, co_pay: i64) -> Value {
        json!({
            "payer": payer,
            "plan": plan,
            "eligible": true,
            "coPay": co_pay
        })
    }

    pub fn ineligible_plan(payer: &str, plan: &str, reason: Option<&str>) -> Value {
        let mut record = json!({
            "payer": payer,
            "plan": plan,
            "eligible": false
        });
        if let Some(reason) = reason {
            record["reason"] = json!(reason);
        }
        record
    }
}

/// Builder for the three seed collections used by handler tests.
#[derive(Debug, Clone, Default)]
pub struct TestSeed {
    pub patients: Vec<Value>,
    pub appointments: Vec<Value>,
    pub insurances: Vec<Value>,
}

impl TestSeed {
    /// Two patients, three slots (one booked) and a small insurance table.
    pub fn clinic() -> Self {
        Self {
            patients: vec![
                MockSeedRecords::patient(1, "Jane", "Doe"),
                MockSeedRecords::patient(2, "John", "Smith"),
            ],
            appointments: vec![
                MockSeedRecords::available_slot(1),
                MockSeedRecords::booked_slot(2, 1),
                MockSeedRecords::available_slot(3),
            ],
            insurances: vec![
                MockSeedRecords::eligible_plan("Acme", "Gold", 20),
                MockSeedRecords::ineligible_plan("Acme", "Bronze", Some("Plan terminated")),
                MockSeedRecords::ineligible_plan("Globex", "Basic", None),
                json!({ "payer": "Initech", "plan": "Standard", "eligible": true }),
            ],
        }
    }

    pub fn with_patients(mut self, patients: Vec<Value>) -> Self {
        self.patients = patients;
        self
    }

    pub fn with_appointments(mut self, appointments: Vec<Value>) -> Self {
        self.appointments = appointments;
        self
    }

    pub fn with_insurances(mut self, insurances: Vec<Value>) -> Self {
        self.insurances = insurances;
        self
    }

    pub fn to_data(&self) -> ClinicData {
        ClinicData {
            patients: parse_records(&self.patients),
            appointments: parse_records(&self.appointments),
            insurances: parse_records(&self.insurances),
        }
    }

    pub fn into_store(self) -> Arc<ClinicStore> {
        Arc::new(ClinicStore::new(self.to_data()))
    }

    /// Writes the collections as seed files into `dir`.
    pub fn write_to(&self, dir: &Path) -> io::Result<()> {
        fs::write(dir.join(PATIENTS_FILE), Value::Array(self.patients.clone()).to_string())?;
        fs::write(dir.join(APPOINTMENTS_FILE), Value::Array(self.appointments.clone()).to_string())?;
        fs::write(dir.join(INSURANCES_FILE), Value::Array(self.insurances.clone()).to_string())?;
        Ok(())
    }
}

fn parse_records<T: serde::de::DeserializeOwned>(records: &[Value]) -> Vec<T> {
    serde_json::from_value(Value::Array(records.to_vec())).expect("test seed records must be valid")
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid test request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid test request")
}

/// Splits a response into its status and JSON body (`Value::Null` for an empty body).
pub async fn response_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable response body");

    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON response body")
    };

    (status, json)
}

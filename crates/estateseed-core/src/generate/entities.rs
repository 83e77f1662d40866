//! Typed row structs for the twenty entity types.
//!
//! The schema is fixed at compile time, so rows are plain structs instead of
//! generic column maps. Each implements [`TableRow`], which names its table
//! and encodes the struct into `Value`s in the table's column order — the
//! order declared in [`crate::schema::TABLES`].

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::generate::value::Value;

/// A struct that encodes into one row of a specific table.
pub trait TableRow {
    const TABLE: &'static str;

    /// Values in the table's declared column order, `id` first.
    fn row(&self) -> Vec<Value>;
}

fn text(s: &str) -> Value {
    Value::String(Cow::Owned(s.to_owned()))
}

fn catalog(s: &'static str) -> Value {
    Value::String(Cow::Borrowed(s))
}

#[derive(Debug, Clone)]
pub struct Fund {
    pub id: i64,
    pub name: String,
    pub inception_date: NaiveDate,
    pub manager: String,
    pub total_assets: f64,
}

impl TableRow for Fund {
    const TABLE: &'static str = "Fund";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            text(&self.name),
            Value::Date(self.inception_date),
            text(&self.manager),
            Value::Float(self.total_assets),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Property {
    pub id: i64,
    pub address: String,
    pub city: &'static str,
    pub state: &'static str,
    pub zip: String,
    pub property_type: &'static str,
    pub value: f64,
    pub fund_id: i64,
}

impl TableRow for Property {
    const TABLE: &'static str = "Property";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            text(&self.address),
            catalog(self.city),
            catalog(self.state),
            text(&self.zip),
            catalog(self.property_type),
            Value::Float(self.value),
            Value::Int(self.fund_id),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Tenant {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl TableRow for Tenant {
    const TABLE: &'static str = "Tenant";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            text(&self.name),
            text(&self.phone),
            text(&self.email),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Lease {
    pub id: i64,
    pub property_id: i64,
    pub tenant_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rent: f64,
    pub deposit: f64,
}

impl TableRow for Lease {
    const TABLE: &'static str = "Lease";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.property_id),
            Value::Int(self.tenant_id),
            Value::Date(self.start_date),
            Value::Date(self.end_date),
            Value::Float(self.rent),
            Value::Float(self.deposit),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Payment {
    pub id: i64,
    pub lease_id: i64,
    pub payment_date: NaiveDate,
    pub amount: f64,
}

impl TableRow for Payment {
    const TABLE: &'static str = "Payment";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.lease_id),
            Value::Date(self.payment_date),
            Value::Float(self.amount),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct FundPerformance {
    pub id: i64,
    pub fund_id: i64,
    pub date: NaiveDate,
    pub nav: f64,
}

impl TableRow for FundPerformance {
    const TABLE: &'static str = "FundPerformance";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.fund_id),
            Value::Date(self.date),
            Value::Float(self.nav),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct PropertyManager {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub hire_date: NaiveDate,
    pub salary: f64,
    pub is_active: bool,
}

impl TableRow for PropertyManager {
    const TABLE: &'static str = "PropertyManager";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            text(&self.name),
            text(&self.email),
            text(&self.phone),
            Value::Date(self.hire_date),
            Value::Float(self.salary),
            Value::Bool(self.is_active),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct PropertyManagerAssignment {
    pub id: i64,
    pub property_id: i64,
    pub manager_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl TableRow for PropertyManagerAssignment {
    const TABLE: &'static str = "PropertyManagerAssignment";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.property_id),
            Value::Int(self.manager_id),
            Value::Date(self.start_date),
            self.end_date.into(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Vendor {
    pub id: i64,
    pub name: &'static str,
    pub category: &'static str,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub rating: f64,
    pub is_active: bool,
}

impl TableRow for Vendor {
    const TABLE: &'static str = "Vendor";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            catalog(self.name),
            catalog(self.category),
            text(&self.contact_person),
            text(&self.phone),
            text(&self.email),
            text(&self.address),
            Value::Float(self.rating),
            Value::Bool(self.is_active),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct MaintenanceRequest {
    pub id: i64,
    pub property_id: i64,
    pub tenant_id: Option<i64>,
    pub vendor_id: Option<i64>,
    pub manager_id: i64,
    pub category: &'static str,
    pub description: String,
    pub priority: &'static str,
    pub status: &'static str,
    pub created_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub estimated_cost: f64,
    pub actual_cost: Option<f64>,
}

impl TableRow for MaintenanceRequest {
    const TABLE: &'static str = "MaintenanceRequest";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.property_id),
            self.tenant_id.into(),
            self.vendor_id.into(),
            Value::Int(self.manager_id),
            catalog(self.category),
            text(&self.description),
            catalog(self.priority),
            catalog(self.status),
            Value::Date(self.created_date),
            self.completed_date.into(),
            Value::Float(self.estimated_cost),
            self.actual_cost.into(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Expense {
    pub id: i64,
    pub property_id: i64,
    pub vendor_id: Option<i64>,
    pub category: &'static str,
    pub description: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
    pub invoice_number: String,
    pub is_recurring: bool,
}

impl TableRow for Expense {
    const TABLE: &'static str = "Expense";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.property_id),
            self.vendor_id.into(),
            catalog(self.category),
            text(&self.description),
            Value::Float(self.amount),
            Value::Date(self.expense_date),
            text(&self.invoice_number),
            Value::Bool(self.is_recurring),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct PropertyDocument {
    pub id: i64,
    pub property_id: i64,
    pub document_type: &'static str,
    pub document_name: String,
    pub file_path: String,
    pub upload_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
}

impl TableRow for PropertyDocument {
    const TABLE: &'static str = "PropertyDocument";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.property_id),
            catalog(self.document_type),
            text(&self.document_name),
            text(&self.file_path),
            Value::Date(self.upload_date),
            self.expiry_date.into(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Inspection {
    pub id: i64,
    pub property_id: i64,
    pub inspector_name: String,
    pub inspection_type: &'static str,
    pub inspection_date: NaiveDate,
    pub overall_rating: &'static str,
    pub notes: String,
    pub next_inspection_date: NaiveDate,
}

impl TableRow for Inspection {
    const TABLE: &'static str = "Inspection";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.property_id),
            text(&self.inspector_name),
            catalog(self.inspection_type),
            Value::Date(self.inspection_date),
            catalog(self.overall_rating),
            text(&self.notes),
            Value::Date(self.next_inspection_date),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Utility {
    pub id: i64,
    pub property_id: i64,
    pub utility_type: &'static str,
    pub provider: &'static str,
    pub account_number: String,
    pub monthly_average: f64,
    pub is_tenant_responsibility: bool,
}

impl TableRow for Utility {
    const TABLE: &'static str = "Utility";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.property_id),
            catalog(self.utility_type),
            catalog(self.provider),
            text(&self.account_number),
            Value::Float(self.monthly_average),
            Value::Bool(self.is_tenant_responsibility),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct TenantHistory {
    pub id: i64,
    pub tenant_id: i64,
    pub previous_address: String,
    pub employment_status: &'static str,
    pub annual_income: f64,
    pub credit_score: i64,
    pub reference_contacts: String,
    pub background_check_date: NaiveDate,
}

impl TableRow for TenantHistory {
    const TABLE: &'static str = "TenantHistory";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.tenant_id),
            text(&self.previous_address),
            catalog(self.employment_status),
            Value::Float(self.annual_income),
            Value::Int(self.credit_score),
            text(&self.reference_contacts),
            Value::Date(self.background_check_date),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct MarketData {
    pub id: i64,
    pub city: &'static str,
    pub state: &'static str,
    pub property_type: &'static str,
    pub date: NaiveDate,
    pub avg_price_per_sqft: f64,
    pub vacancy_rate: f64,
    pub rental_yield: f64,
    pub appreciation_rate: f64,
}

impl TableRow for MarketData {
    const TABLE: &'static str = "MarketData";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            catalog(self.city),
            catalog(self.state),
            catalog(self.property_type),
            Value::Date(self.date),
            Value::Float(self.avg_price_per_sqft),
            Value::Float(self.vacancy_rate),
            Value::Float(self.rental_yield),
            Value::Float(self.appreciation_rate),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Amenity {
    pub id: i64,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

impl TableRow for Amenity {
    const TABLE: &'static str = "Amenity";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            catalog(self.name),
            catalog(self.category),
            catalog(self.description),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct PropertyAmenity {
    pub id: i64,
    pub property_id: i64,
    pub amenity_id: i64,
    pub is_available: bool,
    pub additional_cost: f64,
}

impl TableRow for PropertyAmenity {
    const TABLE: &'static str = "PropertyAmenity";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.property_id),
            Value::Int(self.amenity_id),
            Value::Bool(self.is_available),
            Value::Float(self.additional_cost),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct LeaseRenewal {
    pub id: i64,
    pub lease_id: i64,
    pub renewal_date: NaiveDate,
    pub new_rent: f64,
    pub new_end_date: NaiveDate,
    pub renewal_terms: &'static str,
}

impl TableRow for LeaseRenewal {
    const TABLE: &'static str = "LeaseRenewal";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.lease_id),
            Value::Date(self.renewal_date),
            Value::Float(self.new_rent),
            Value::Date(self.new_end_date),
            catalog(self.renewal_terms),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Insurance {
    pub id: i64,
    pub property_id: i64,
    pub insurance_type: &'static str,
    pub provider: &'static str,
    pub policy_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub premium_amount: f64,
    pub coverage_amount: f64,
}

impl TableRow for Insurance {
    const TABLE: &'static str = "Insurance";

    fn row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Int(self.property_id),
            catalog(self.insurance_type),
            catalog(self.provider),
            text(&self.policy_number),
            Value::Date(self.start_date),
            Value::Date(self.end_date),
            Value::Float(self.premium_amount),
            Value::Float(self.coverage_amount),
        ]
    }
}

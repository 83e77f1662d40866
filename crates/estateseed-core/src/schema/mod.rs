//! # Schema Catalog
//!
//! The portfolio schema is fixed: twenty tables, integer identity keys, and
//! every foreign key pointing at a parent's `id`. Rather than introspecting a
//! live database, the catalog is compiled in — `TABLES` lists every table in
//! parent-first creation order, with its DDL, column set, and FK metadata.
//!
//! The same metadata drives three consumers: the destructive reset (drop in
//! child-first order, create in parent-first order), the dependency graph
//! renderer, and the integrity checker's referential-integrity pass.

pub mod graph;

/// A foreign-key column on a table. Every FK in this schema references the
/// parent table's `id` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeyRef {
    pub column: &'static str,
    pub references: &'static str,
}

/// Static definition of one table: DDL, column order, and FK edges.
#[derive(Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub create_sql: &'static str,
    pub columns: &'static [&'static str],
    pub foreign_keys: &'static [ForeignKeyRef],
}

/// All twenty tables in parent-first creation order.
///
/// Insertion follows this order; dropping uses the reverse. The unit tests
/// verify the ordering against the FK metadata, and `schema::graph` derives
/// the same order topologically.
pub const TABLES: [TableDef; 20] = [
    TableDef {
        name: "Fund",
        create_sql: "CREATE TABLE IF NOT EXISTS Fund (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    inception_date DATE,
    manager TEXT,
    total_assets REAL
)",
        columns: &["id", "name", "inception_date", "manager", "total_assets"],
        foreign_keys: &[],
    },
    TableDef {
        name: "Tenant",
        create_sql: "CREATE TABLE IF NOT EXISTS Tenant (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    phone TEXT,
    email TEXT
)",
        columns: &["id", "name", "phone", "email"],
        foreign_keys: &[],
    },
    TableDef {
        name: "PropertyManager",
        create_sql: "CREATE TABLE IF NOT EXISTS PropertyManager (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    hire_date DATE,
    salary REAL,
    is_active BOOLEAN
)",
        columns: &[
            "id",
            "name",
            "email",
            "phone",
            "hire_date",
            "salary",
            "is_active",
        ],
        foreign_keys: &[],
    },
    TableDef {
        name: "Vendor",
        create_sql: "CREATE TABLE IF NOT EXISTS Vendor (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    category TEXT,
    contact_person TEXT,
    phone TEXT,
    email TEXT,
    address TEXT,
    rating REAL,
    is_active BOOLEAN
)",
        columns: &[
            "id",
            "name",
            "category",
            "contact_person",
            "phone",
            "email",
            "address",
            "rating",
            "is_active",
        ],
        foreign_keys: &[],
    },
    TableDef {
        name: "Amenity",
        create_sql: "CREATE TABLE IF NOT EXISTS Amenity (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    category TEXT,
    description TEXT
)",
        columns: &["id", "name", "category", "description"],
        foreign_keys: &[],
    },
    TableDef {
        name: "Property",
        create_sql: "CREATE TABLE IF NOT EXISTS Property (
    id INTEGER PRIMARY KEY,
    address TEXT NOT NULL,
    city TEXT,
    state TEXT,
    zip TEXT,
    type TEXT,
    value REAL,
    fund_id INTEGER,
    FOREIGN KEY(fund_id) REFERENCES Fund(id)
)",
        columns: &[
            "id", "address", "city", "state", "zip", "type", "value", "fund_id",
        ],
        foreign_keys: &[ForeignKeyRef {
            column: "fund_id",
            references: "Fund",
        }],
    },
    TableDef {
        name: "PropertyManagerAssignment",
        create_sql: "CREATE TABLE IF NOT EXISTS PropertyManagerAssignment (
    id INTEGER PRIMARY KEY,
    property_id INTEGER,
    manager_id INTEGER,
    start_date DATE,
    end_date DATE,
    FOREIGN KEY(property_id) REFERENCES Property(id),
    FOREIGN KEY(manager_id) REFERENCES PropertyManager(id)
)",
        columns: &["id", "property_id", "manager_id", "start_date", "end_date"],
        foreign_keys: &[
            ForeignKeyRef {
                column: "property_id",
                references: "Property",
            },
            ForeignKeyRef {
                column: "manager_id",
                references: "PropertyManager",
            },
        ],
    },
    TableDef {
        name: "MaintenanceRequest",
        create_sql: "CREATE TABLE IF NOT EXISTS MaintenanceRequest (
    id INTEGER PRIMARY KEY,
    property_id INTEGER,
    tenant_id INTEGER,
    vendor_id INTEGER,
    manager_id INTEGER,
    category TEXT,
    description TEXT,
    priority TEXT,
    status TEXT,
    created_date DATE,
    completed_date DATE,
    estimated_cost REAL,
    actual_cost REAL,
    FOREIGN KEY(property_id) REFERENCES Property(id),
    FOREIGN KEY(tenant_id) REFERENCES Tenant(id),
    FOREIGN KEY(vendor_id) REFERENCES Vendor(id),
    FOREIGN KEY(manager_id) REFERENCES PropertyManager(id)
)",
        columns: &[
            "id",
            "property_id",
            "tenant_id",
            "vendor_id",
            "manager_id",
            "category",
            "description",
            "priority",
            "status",
            "created_date",
            "completed_date",
            "estimated_cost",
            "actual_cost",
        ],
        foreign_keys: &[
            ForeignKeyRef {
                column: "property_id",
                references: "Property",
            },
            ForeignKeyRef {
                column: "tenant_id",
                references: "Tenant",
            },
            ForeignKeyRef {
                column: "vendor_id",
                references: "Vendor",
            },
            ForeignKeyRef {
                column: "manager_id",
                references: "PropertyManager",
            },
        ],
    },
    TableDef {
        name: "Expense",
        create_sql: "CREATE TABLE IF NOT EXISTS Expense (
    id INTEGER PRIMARY KEY,
    property_id INTEGER,
    vendor_id INTEGER,
    category TEXT,
    description TEXT,
    amount REAL,
    expense_date DATE,
    invoice_number TEXT,
    is_recurring BOOLEAN,
    FOREIGN KEY(property_id) REFERENCES Property(id),
    FOREIGN KEY(vendor_id) REFERENCES Vendor(id)
)",
        columns: &[
            "id",
            "property_id",
            "vendor_id",
            "category",
            "description",
            "amount",
            "expense_date",
            "invoice_number",
            "is_recurring",
        ],
        foreign_keys: &[
            ForeignKeyRef {
                column: "property_id",
                references: "Property",
            },
            ForeignKeyRef {
                column: "vendor_id",
                references: "Vendor",
            },
        ],
    },
    TableDef {
        name: "PropertyDocument",
        create_sql: "CREATE TABLE IF NOT EXISTS PropertyDocument (
    id INTEGER PRIMARY KEY,
    property_id INTEGER,
    document_type TEXT,
    document_name TEXT,
    file_path TEXT,
    upload_date DATE,
    expiry_date DATE,
    FOREIGN KEY(property_id) REFERENCES Property(id)
)",
        columns: &[
            "id",
            "property_id",
            "document_type",
            "document_name",
            "file_path",
            "upload_date",
            "expiry_date",
        ],
        foreign_keys: &[ForeignKeyRef {
            column: "property_id",
            references: "Property",
        }],
    },
    TableDef {
        name: "Inspection",
        create_sql: "CREATE TABLE IF NOT EXISTS Inspection (
    id INTEGER PRIMARY KEY,
    property_id INTEGER,
    inspector_name TEXT,
    inspection_type TEXT,
    inspection_date DATE,
    overall_rating TEXT,
    notes TEXT,
    next_inspection_date DATE,
    FOREIGN KEY(property_id) REFERENCES Property(id)
)",
        columns: &[
            "id",
            "property_id",
            "inspector_name",
            "inspection_type",
            "inspection_date",
            "overall_rating",
            "notes",
            "next_inspection_date",
        ],
        foreign_keys: &[ForeignKeyRef {
            column: "property_id",
            references: "Property",
        }],
    },
    TableDef {
        name: "Utility",
        create_sql: "CREATE TABLE IF NOT EXISTS Utility (
    id INTEGER PRIMARY KEY,
    property_id INTEGER,
    utility_type TEXT,
    provider TEXT,
    account_number TEXT,
    monthly_average REAL,
    is_tenant_responsibility BOOLEAN,
    FOREIGN KEY(property_id) REFERENCES Property(id)
)",
        columns: &[
            "id",
            "property_id",
            "utility_type",
            "provider",
            "account_number",
            "monthly_average",
            "is_tenant_responsibility",
        ],
        foreign_keys: &[ForeignKeyRef {
            column: "property_id",
            references: "Property",
        }],
    },
    TableDef {
        name: "TenantHistory",
        create_sql: "CREATE TABLE IF NOT EXISTS TenantHistory (
    id INTEGER PRIMARY KEY,
    tenant_id INTEGER,
    previous_address TEXT,
    employment_status TEXT,
    annual_income REAL,
    credit_score INTEGER,
    reference_contacts TEXT,
    background_check_date DATE,
    FOREIGN KEY(tenant_id) REFERENCES Tenant(id)
)",
        columns: &[
            "id",
            "tenant_id",
            "previous_address",
            "employment_status",
            "annual_income",
            "credit_score",
            "reference_contacts",
            "background_check_date",
        ],
        foreign_keys: &[ForeignKeyRef {
            column: "tenant_id",
            references: "Tenant",
        }],
    },
    TableDef {
        name: "PropertyAmenity",
        create_sql: "CREATE TABLE IF NOT EXISTS PropertyAmenity (
    id INTEGER PRIMARY KEY,
    property_id INTEGER,
    amenity_id INTEGER,
    is_available BOOLEAN,
    additional_cost REAL,
    FOREIGN KEY(property_id) REFERENCES Property(id),
    FOREIGN KEY(amenity_id) REFERENCES Amenity(id)
)",
        columns: &[
            "id",
            "property_id",
            "amenity_id",
            "is_available",
            "additional_cost",
        ],
        foreign_keys: &[
            ForeignKeyRef {
                column: "property_id",
                references: "Property",
            },
            ForeignKeyRef {
                column: "amenity_id",
                references: "Amenity",
            },
        ],
    },
    TableDef {
        name: "Insurance",
        create_sql: "CREATE TABLE IF NOT EXISTS Insurance (
    id INTEGER PRIMARY KEY,
    property_id INTEGER,
    insurance_type TEXT,
    provider TEXT,
    policy_number TEXT,
    start_date DATE,
    end_date DATE,
    premium_amount REAL,
    coverage_amount REAL,
    FOREIGN KEY(property_id) REFERENCES Property(id)
)",
        columns: &[
            "id",
            "property_id",
            "insurance_type",
            "provider",
            "policy_number",
            "start_date",
            "end_date",
            "premium_amount",
            "coverage_amount",
        ],
        foreign_keys: &[ForeignKeyRef {
            column: "property_id",
            references: "Property",
        }],
    },
    TableDef {
        name: "Lease",
        create_sql: "CREATE TABLE IF NOT EXISTS Lease (
    id INTEGER PRIMARY KEY,
    property_id INTEGER,
    tenant_id INTEGER,
    start_date DATE,
    end_date DATE,
    rent REAL,
    deposit REAL,
    FOREIGN KEY(property_id) REFERENCES Property(id),
    FOREIGN KEY(tenant_id) REFERENCES Tenant(id)
)",
        columns: &[
            "id",
            "property_id",
            "tenant_id",
            "start_date",
            "end_date",
            "rent",
            "deposit",
        ],
        foreign_keys: &[
            ForeignKeyRef {
                column: "property_id",
                references: "Property",
            },
            ForeignKeyRef {
                column: "tenant_id",
                references: "Tenant",
            },
        ],
    },
    TableDef {
        name: "Payment",
        create_sql: "CREATE TABLE IF NOT EXISTS Payment (
    id INTEGER PRIMARY KEY,
    lease_id INTEGER,
    payment_date DATE,
    amount REAL,
    FOREIGN KEY(lease_id) REFERENCES Lease(id)
)",
        columns: &["id", "lease_id", "payment_date", "amount"],
        foreign_keys: &[ForeignKeyRef {
            column: "lease_id",
            references: "Lease",
        }],
    },
    TableDef {
        name: "LeaseRenewal",
        create_sql: "CREATE TABLE IF NOT EXISTS LeaseRenewal (
    id INTEGER PRIMARY KEY,
    lease_id INTEGER,
    renewal_date DATE,
    new_rent REAL,
    new_end_date DATE,
    renewal_terms TEXT,
    FOREIGN KEY(lease_id) REFERENCES Lease(id)
)",
        columns: &[
            "id",
            "lease_id",
            "renewal_date",
            "new_rent",
            "new_end_date",
            "renewal_terms",
        ],
        foreign_keys: &[ForeignKeyRef {
            column: "lease_id",
            references: "Lease",
        }],
    },
    TableDef {
        name: "FundPerformance",
        create_sql: "CREATE TABLE IF NOT EXISTS FundPerformance (
    id INTEGER PRIMARY KEY,
    fund_id INTEGER,
    date DATE,
    nav REAL,
    FOREIGN KEY(fund_id) REFERENCES Fund(id)
)",
        columns: &["id", "fund_id", "date", "nav"],
        foreign_keys: &[ForeignKeyRef {
            column: "fund_id",
            references: "Fund",
        }],
    },
    TableDef {
        name: "MarketData",
        create_sql: "CREATE TABLE IF NOT EXISTS MarketData (
    id INTEGER PRIMARY KEY,
    city TEXT,
    state TEXT,
    property_type TEXT,
    date DATE,
    avg_price_per_sqft REAL,
    vacancy_rate REAL,
    rental_yield REAL,
    appreciation_rate REAL
)",
        columns: &[
            "id",
            "city",
            "state",
            "property_type",
            "date",
            "avg_price_per_sqft",
            "vacancy_rate",
            "rental_yield",
            "appreciation_rate",
        ],
        foreign_keys: &[],
    },
];

/// Look up a table definition by name.
pub fn table(name: &str) -> Option<&'static TableDef> {
    TABLES.iter().find(|t| t.name == name)
}

/// Tables in parent-first creation/insertion order.
pub fn creation_order() -> impl Iterator<Item = &'static TableDef> {
    TABLES.iter()
}

/// Tables in child-first drop order.
pub fn drop_order() -> impl Iterator<Item = &'static TableDef> {
    TABLES.iter().rev()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_twenty_tables() {
        assert_eq!(TABLES.len(), 20);
        let names: HashSet<&str> = TABLES.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), 20, "table names must be unique");
    }

    #[test]
    fn creation_order_is_parent_first() {
        let mut seen: HashSet<&str> = HashSet::new();
        for table in creation_order() {
            for fk in table.foreign_keys {
                assert!(
                    seen.contains(fk.references),
                    "{}.{} references {} before it is created",
                    table.name,
                    fk.column,
                    fk.references
                );
            }
            seen.insert(table.name);
        }
    }

    #[test]
    fn every_fk_target_exists() {
        for t in &TABLES {
            for fk in t.foreign_keys {
                assert!(
                    table(fk.references).is_some(),
                    "{}.{} references unknown table {}",
                    t.name,
                    fk.column,
                    fk.references
                );
            }
        }
    }

    #[test]
    fn columns_match_ddl() {
        for t in &TABLES {
            for col in t.columns {
                assert!(
                    t.create_sql.contains(col),
                    "{} DDL is missing column {}",
                    t.name,
                    col
                );
            }
            assert_eq!(t.columns[0], "id", "{} must lead with its identity key", t.name);
        }
    }

    #[test]
    fn lookup_by_name() {
        assert!(table("Lease").is_some());
        assert!(table("lease").is_none());
        assert!(table("Orders").is_none());
    }
}

//! Testing utilities for AgriChain workspace
//!
//! Shared test helpers, fixtures, and proptest strategies.

#![allow(missing_docs)]

use agri_model::{
    AnalyticsSnapshot, ConsumerFigures, CropCount, FarmerFigures, LedgerHash, Notification,
    NotificationId, Product, ProductId, ProductStatus, QrCode, QualityGrade, Role, Severity,
    Transaction, TransactionId, TransactionKind, User, UserId,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use std::collections::BTreeMap;

pub const HASH_P001: &str = "0x1a2b3c4d5e6f7890abcdef1234567890";
pub const HASH_P002: &str = "0x2b3c4d5e6f7890abcdef1234567890ab";
pub const HASH_P003: &str = "0x3c4d5e6f7890abcdef1234567890abcd";

pub fn ledger_hash(raw: &str) -> LedgerHash {
    LedgerHash::parse(raw).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// Builder for products with demo-like defaults
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            product: Product {
                id: ProductId::new(id),
                name: name.to_string(),
                category: "Grains".to_string(),
                farmer_id: UserId::new("1"),
                farmer_name: "Rajesh Kumar".to_string(),
                harvest_date: date(2024, 1, 15),
                quantity: 100,
                quality: QualityGrade::A,
                price: 10,
                location: "Punjab, India".to_string(),
                certifications: Vec::new(),
                qr_code: QrCode::new(format!("QR-{id}")),
                status: ProductStatus::Harvested,
                blockchain_hash: ledger_hash(HASH_P001),
            },
        }
    }

    pub fn category(mut self, category: &str) -> Self {
        self.product.category = category.to_string();
        self
    }

    pub fn farmer(mut self, id: &str, name: &str) -> Self {
        self.product.farmer_id = UserId::new(id);
        self.product.farmer_name = name.to_string();
        self
    }

    pub fn harvested(mut self, on: NaiveDate) -> Self {
        self.product.harvest_date = on;
        self
    }

    pub fn quantity(mut self, quantity: u64) -> Self {
        self.product.quantity = quantity;
        self
    }

    pub fn quality(mut self, quality: QualityGrade) -> Self {
        self.product.quality = quality;
        self
    }

    pub fn price(mut self, price: u64) -> Self {
        self.product.price = price;
        self
    }

    pub fn certifications(mut self, labels: &[&str]) -> Self {
        self.product.certifications = labels.iter().map(|s| (*s).to_string()).collect();
        self
    }

    pub fn qr(mut self, code: &str) -> Self {
        self.product.qr_code = QrCode::new(code);
        self
    }

    pub fn status(mut self, status: ProductStatus) -> Self {
        self.product.status = status;
        self
    }

    pub fn hash(mut self, raw: &str) -> Self {
        self.product.blockchain_hash = ledger_hash(raw);
        self
    }

    pub fn build(self) -> Product {
        self.product
    }
}

/// Builder for ledger entries
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    transaction: Transaction,
}

impl TransactionBuilder {
    pub fn new(id: &str, product_id: &str) -> Self {
        Self {
            transaction: Transaction {
                id: TransactionId::new(id),
                product_id: ProductId::new(product_id),
                from: "Farm".to_string(),
                to: "Market".to_string(),
                timestamp: timestamp(2024, 1, 16, 10, 30),
                kind: TransactionKind::Transfer,
                hash: ledger_hash(HASH_P001),
                verified: true,
                amount: None,
            },
        }
    }

    pub fn parties(mut self, from: &str, to: &str) -> Self {
        self.transaction.from = from.to_string();
        self.transaction.to = to.to_string();
        self
    }

    pub fn at(mut self, at: DateTime<Utc>) -> Self {
        self.transaction.timestamp = at;
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.transaction.kind = kind;
        self
    }

    pub fn hash(mut self, raw: &str) -> Self {
        self.transaction.hash = ledger_hash(raw);
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.transaction.verified = verified;
        self
    }

    pub fn amount(mut self, amount: u64) -> Self {
        self.transaction.amount = Some(amount);
        self
    }

    pub fn build(self) -> Transaction {
        self.transaction
    }
}

/// The three demo products: rice (Grains), tomatoes (Vegetables), milk (Dairy)
pub fn sample_products() -> Vec<Product> {
    vec![
        ProductBuilder::new("P001", "Organic Basmati Rice")
            .category("Grains")
            .harvested(date(2024, 1, 15))
            .quantity(500)
            .quality(QualityGrade::APlus)
            .price(85)
            .certifications(&["Organic", "Fair Trade", "Non-GMO"])
            .qr("QR001")
            .status(ProductStatus::Delivered)
            .hash(HASH_P001)
            .build(),
        ProductBuilder::new("P002", "Fresh Tomatoes")
            .category("Vegetables")
            .harvested(date(2024, 1, 20))
            .quantity(200)
            .quality(QualityGrade::A)
            .price(25)
            .certifications(&["Pesticide-free", "Fresh"])
            .qr("QR002")
            .status(ProductStatus::InTransit)
            .hash(HASH_P002)
            .build(),
        ProductBuilder::new("P003", "Organic Milk")
            .category("Dairy")
            .harvested(date(2024, 1, 22))
            .quantity(100)
            .quality(QualityGrade::APlus)
            .price(45)
            .certifications(&["Organic", "Grade A", "Fresh"])
            .qr("QR003")
            .status(ProductStatus::Harvested)
            .hash(HASH_P003)
            .build(),
    ]
}

/// The three demo ledger entries
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        TransactionBuilder::new("T001", "P001")
            .parties("Rajesh Kumar (Farmer)", "Green Valley Retail")
            .at(timestamp(2024, 1, 16, 10, 30))
            .kind(TransactionKind::Transfer)
            .hash(HASH_P001)
            .amount(42_500)
            .build(),
        TransactionBuilder::new("T002", "P002")
            .parties("Rajesh Kumar (Farmer)", "Transport Co.")
            .at(timestamp(2024, 1, 21, 14, 15))
            .kind(TransactionKind::Transfer)
            .hash(HASH_P002)
            .amount(5_000)
            .build(),
        TransactionBuilder::new("T003", "P003")
            .parties("Farm", "Rajesh Kumar (Farmer)")
            .at(timestamp(2024, 1, 22, 8, 0))
            .kind(TransactionKind::Harvest)
            .hash(HASH_P003)
            .build(),
    ]
}

pub fn sample_users() -> Vec<User> {
    let user = |id: &str, name: &str, email: &str, role: Role, location: &str, phone: &str| User {
        id: UserId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: None,
        location: Some(location.to_string()),
        phone: Some(phone.to_string()),
    };
    vec![
        user("1", "Rajesh Kumar", "rajesh@farmer.com", Role::Farmer, "Punjab, India", "+91 9876543210"),
        user("2", "Green Valley Retail", "contact@greenvalley.com", Role::Retailer, "Delhi, India", "+91 9876543211"),
        user("3", "Priya Sharma", "priya@consumer.com", Role::Consumer, "Mumbai, India", "+91 9876543212"),
    ]
}

pub fn sample_notifications() -> Vec<Notification> {
    let note = |id: &str, user: &str, title: &str, severity: Severity, read: bool, at: DateTime<Utc>| {
        Notification {
            id: NotificationId::new(id),
            user_id: UserId::new(user),
            title: title.to_string(),
            message: format!("{title} message"),
            severity,
            read,
            timestamp: at,
        }
    };
    vec![
        note("N001", "1", "Payment Received", Severity::Success, false, timestamp(2024, 1, 16, 11, 0)),
        note("N002", "1", "Demand Alert", Severity::Info, false, timestamp(2024, 1, 20, 9, 0)),
        note("N003", "2", "Shipment Update", Severity::Info, true, timestamp(2024, 1, 21, 15, 0)),
    ]
}

pub fn sample_analytics() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        total_products: 1250,
        total_transactions: 3400,
        total_farmers: 450,
        total_retailers: 120,
        monthly_revenue: 2_850_000,
        quality_distribution: BTreeMap::from([
            (QualityGrade::APlus, 45),
            (QualityGrade::A, 35),
            (QualityGrade::B, 15),
            (QualityGrade::C, 5),
        ]),
        popular_crops: [("Rice", 180), ("Wheat", 150), ("Tomato", 120), ("Milk", 90), ("Potato", 80)]
            .into_iter()
            .map(|(name, count)| CropCount {
                name: name.to_string(),
                count,
            })
            .collect(),
        farmer: FarmerFigures::default(),
        consumer: ConsumerFigures::default(),
    }
}

// Proptest strategies

const NAME_POOL: &[&str] = &[
    "Organic Basmati Rice",
    "Fresh Tomatoes",
    "Organic Milk",
    "Golden Wheat",
    "Alphonso Mango",
    "Red Potato",
];

const FARMER_POOL: &[&str] = &["Rajesh Kumar", "Anita Devi", "Suresh Patel"];

const CATEGORY_POOL: &[&str] = &["Grains", "Vegetables", "Dairy", "Fruits"];

const PARTY_POOL: &[&str] = &[
    "Farm",
    "Rajesh Kumar (Farmer)",
    "Green Valley Retail",
    "Transport Co.",
];

pub fn arb_quality() -> impl Strategy<Value = QualityGrade> {
    prop::sample::select(QualityGrade::ALL.to_vec())
}

pub fn arb_status() -> impl Strategy<Value = ProductStatus> {
    prop::sample::select(ProductStatus::ALL.to_vec())
}

pub fn arb_kind() -> impl Strategy<Value = TransactionKind> {
    prop::sample::select(TransactionKind::ALL.to_vec())
}

pub fn arb_product() -> impl Strategy<Value = Product> {
    (
        0u32..1000,
        prop::sample::select(NAME_POOL),
        prop::sample::select(FARMER_POOL),
        prop::sample::select(CATEGORY_POOL),
        arb_quality(),
        arb_status(),
        0u64..10_000,
    )
        .prop_map(|(n, name, farmer, category, quality, status, price)| {
            ProductBuilder::new(&format!("P{n:03}"), name)
                .farmer("1", farmer)
                .category(category)
                .quality(quality)
                .status(status)
                .price(price)
                .qr(&format!("QR{n:03}"))
                .build()
        })
}

pub fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (
        0u32..1000,
        0u32..20,
        prop::sample::select(PARTY_POOL),
        prop::sample::select(PARTY_POOL),
        arb_kind(),
        any::<bool>(),
        prop::option::of(0u64..100_000),
    )
        .prop_map(|(n, product, from, to, kind, verified, amount)| {
            let mut tx = TransactionBuilder::new(&format!("T{n:03}"), &format!("P{product:03}"))
                .parties(from, to)
                .kind(kind)
                .verified(verified)
                .build();
            tx.amount = amount;
            tx
        })
}

/// Search strings drawn from fragments of the pools, in mixed case
pub fn arb_search_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("organic".to_string()),
        Just("TOMATO".to_string()),
        Just("rajesh".to_string()),
        Just("Retail".to_string()),
        Just("p00".to_string()),
        Just("farm".to_string()),
        "[a-zA-Z ]{0,4}",
    ]
}

//! Masterlist export shaping.
//!
//! Produces the spreadsheet row set (fixed column order, CSV encoded)
//! and the printable ID-card payload. Actual spreadsheet/PDF rendering
//! happens client-side; this module only shapes the data.

use serde::Serialize;

use crate::reconcile::MasterlistRow;

/// Fixed column set for spreadsheet and print exports, in order.
pub const EXPORT_COLUMNS: &[&str] = &[
    "ID Number",
    "Name",
    "Birthday",
    "Age",
    "Barangay",
    "Status",
    "RFID Status",
    "RFID Code",
    "Quarter",
    "Missed Consecutive",
    "Last Claim Date",
];

/// Encode masterlist rows as CSV with the fixed column set.
///
/// RFC 4180 quoting: fields containing commas, quotes, or newlines are
/// quoted, with embedded quotes doubled.
pub fn to_csv(rows: &[MasterlistRow]) -> String {
    let mut out = String::new();
    write_record(&mut out, EXPORT_COLUMNS.iter().map(|c| c.to_string()));

    for row in rows {
        write_record(
            &mut out,
            [
                row.senior_id.clone(),
                row.name.clone(),
                row.birthday.clone(),
                row.age.to_string(),
                row.barangay.clone(),
                row.status.label().to_string(),
                row.rfid_status.to_string(),
                row.rfid_code.clone().unwrap_or_default(),
                row.quarter.map(|q| format!("Q{q}")).unwrap_or_default(),
                row.missed_consecutive.to_string(),
                row.last_claim_date.clone(),
            ]
            .into_iter(),
        );
    }

    out
}

fn write_record(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_field(&field));
    }
    out.push_str("\r\n");
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Physical ID card width in millimetres.
pub const CARD_WIDTH_MM: f32 = 90.0;
/// Physical ID card height in millimetres.
pub const CARD_HEIGHT_MM: f32 = 50.0;

/// Payload for the client-side printable ID card (front and back).
#[derive(Debug, Clone, Serialize)]
pub struct IdCard {
    pub width_mm: f32,
    pub height_mm: f32,
    pub front: IdCardFront,
    pub back: IdCardBack,
}

/// Front face: identity fields and photo.
#[derive(Debug, Clone, Serialize)]
pub struct IdCardFront {
    pub senior_id: String,
    pub name: String,
    pub birthday: String,
    pub barangay: String,
    /// Base64-encoded profile picture, when one is on file.
    pub profile_picture: Option<String>,
}

/// Back face: card binding details.
#[derive(Debug, Clone, Serialize)]
pub struct IdCardBack {
    pub rfid_code: String,
    pub date_bound: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
}

/// Inputs for building an ID card from one binding plus its senior.
#[derive(Debug, Clone)]
pub struct IdCardInput {
    pub senior_id: String,
    pub name: String,
    pub birthday: String,
    pub barangay: String,
    pub profile_picture: Option<String>,
    pub rfid_code: String,
    pub date_bound: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
}

/// Build the printable card payload.
pub fn build_id_card(input: IdCardInput) -> IdCard {
    IdCard {
        width_mm: CARD_WIDTH_MM,
        height_mm: CARD_HEIGHT_MM,
        front: IdCardFront {
            senior_id: input.senior_id,
            name: input.name,
            birthday: input.birthday,
            barangay: input.barangay,
            profile_picture: input.profile_picture,
        },
        back: IdCardBack {
            rfid_code: input.rfid_code,
            date_bound: input.date_bound,
            emergency_contact_name: input.emergency_contact_name,
            emergency_contact_number: input.emergency_contact_number,
        },
    }
}

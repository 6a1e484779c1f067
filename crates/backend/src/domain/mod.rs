pub mod a001_land_parcel;
pub mod a002_construction_contract;
pub mod a003_legal_case;
pub mod a004_rti_application;
pub mod a005_marketing_lead;
pub mod a006_material_issue;

mod types;

pub use types::{
    MaintenanceFlag, MaintenanceStatus, DEFAULT_MAINTENANCE_MESSAGE, MAINTENANCE_COLLECTION,
    MAINTENANCE_DOC_ID, MAINTENANCE_UPDATED_BY,
};

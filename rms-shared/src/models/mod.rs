pub mod errors;
pub mod records;
pub mod user;

pub use errors::ErrorResponse;
pub use records::{
    ApiResponse, NamedRecord, NamedRecordInput, Page, RequestCreate, RequestUpdate, RequestView,
    SalesPerson, SalesPersonInput, StickerCanvasCreate, StickerCanvasView, StickerCreate,
    StickerView,
};
pub use user::{LoginRequest, LoginResponse, MeResponse, User, UserRole};

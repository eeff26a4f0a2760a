mod auth;
pub use auth::Auth;

mod profile;
pub use profile::Profile;

mod contract_detail;
pub use contract_detail::ContractDetail;

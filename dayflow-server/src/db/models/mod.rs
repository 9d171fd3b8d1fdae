//! Data models for the Dayflow document store

pub mod serde_helpers;

pub mod attendance;
pub mod employee_profile;
pub mod leave_request;
pub mod payroll;
pub mod user;

pub use attendance::{Attendance, AttendanceStatus, AttendanceView};
pub use employee_profile::{
    Contact, EmployeeCreateRequest, EmployeeProfile, EmployeeProfileUpdate, EmployeeProfileView,
    NewEmployee, SalaryStructure,
};
pub use leave_request::{
    LeaveApplyRequest, LeaveDecisionRequest, LeaveRequest, LeaveRequestView, LeaveStatus, LeaveType,
};
pub use payroll::{Payroll, PayrollGenerateRequest, PayrollStatus, PayrollView};
pub use user::{
    AccountStatus, LoginRequest, RegisterRequest, Role, User, UserId, UserView, VerifyRequest,
};

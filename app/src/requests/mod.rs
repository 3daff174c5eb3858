mod student_request;

pub use student_request::CreateStudentRequest;

//! Response shape declarations emitted for typed projects

pub const MESSAGE_RESPONSE: &str = "export interface MessageResponse {
  message: string;
}
";

pub const ERROR_RESPONSE: &str = "export interface ErrorResponse {
  message: string;
  stack?: string;
}
";

//! User-facing error messages shown by the dashboard (Korean locale).

pub const INVALID_INPUT: &str = "입력 데이터가 올바르지 않습니다.";
pub const AUTH_REQUIRED: &str = "인증이 필요합니다.";
pub const FORBIDDEN: &str = "접근 권한이 없습니다.";
pub const NOT_FOUND: &str = "요청한 리소스를 찾을 수 없습니다.";
pub const CONFLICT: &str = "이미 존재하는 데이터입니다.";
pub const RATE_LIMITED: &str = "너무 많은 요청입니다. 잠시 후 다시 시도해주세요.";
pub const SERVER_ERROR: &str = "서버 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";
pub const UNKNOWN_ERROR: &str = "알 수 없는 오류가 발생했습니다.";

pub const TIMEOUT: &str = "요청 시간이 초과되었습니다. 다시 시도해주세요.";
pub const NETWORK_ERROR: &str = "네트워크 오류가 발생했습니다. 인터넷 연결을 확인해주세요.";
pub const UNEXPECTED_ERROR: &str = "예상치 못한 오류가 발생했습니다.";

pub const RECENT_NOTICES_FAILED: &str = "최근 입법예고를 불러오는데 실패했습니다.";
pub const SYSTEM_STATS_FAILED: &str = "시스템 통계를 불러오는데 실패했습니다.";
pub const SYSTEM_HEALTH_FAILED: &str = "시스템 건강도를 불러오는데 실패했습니다.";

pub const WEBHOOK_ALREADY_REGISTERED: &str = "이미 등록된 웹훅 URL입니다.";
pub const WEBHOOK_LIMIT_REACHED: &str = "너무 많은 웹훅이 등록되어 있습니다.";
pub const WEBHOOK_REGISTRATION_FAILED: &str = "웹훅 등록에 실패했습니다.";

/// Fixed message for a failed response that carried no usable body text.
pub fn for_status(status: u16) -> &'static str {
    match status {
        400 => INVALID_INPUT,
        401 => AUTH_REQUIRED,
        403 => FORBIDDEN,
        404 => NOT_FOUND,
        409 => CONFLICT,
        429 => RATE_LIMITED,
        500 | 502 | 503 | 504 => SERVER_ERROR,
        _ => UNKNOWN_ERROR,
    }
}

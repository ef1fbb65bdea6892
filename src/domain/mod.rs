//! Domain layer
//! 재생 상태/검색 모델과 입력 검증·출력 규칙을 외부 의존성 없이 표현한다.

pub mod format;
pub mod playback;
pub mod policy;
pub mod search;

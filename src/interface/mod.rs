//! Interface layer
//! 사용자 입력(프로세스 인자/REPL)을 유스케이스 호출로 연결한다.

pub mod cli;

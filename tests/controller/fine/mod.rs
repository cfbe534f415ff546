mod create;
mod dispute;
mod lifecycle;
mod resolve_dispute;
mod update_status;
mod user_fines;

mod auth;
mod major;
mod schedule;
mod staff;
mod student;

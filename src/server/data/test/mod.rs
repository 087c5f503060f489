mod announcement;
mod major;
mod schedule;
mod staff;
mod student;
mod subject;
mod user;

mod booking;
mod lot;
mod spot;
mod user;

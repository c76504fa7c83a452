pub mod db;
pub mod gate;
pub mod revalidate;

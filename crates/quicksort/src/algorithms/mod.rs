pub mod lomuto;
pub mod median3;
pub mod random_pivot;

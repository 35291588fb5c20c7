pub mod cdrisc;
pub mod cyrm_child;
pub mod mspss;
pub mod pcl5;
pub mod teen_strengths;
pub mod ucla;

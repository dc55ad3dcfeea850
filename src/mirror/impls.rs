pub mod modinfo_mirror;

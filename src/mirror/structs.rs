/// Mirror writing download totals into per-package modinfo.json files.
pub mod modinfo_mirror;

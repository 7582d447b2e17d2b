// src/shared/mod.rs

// Declara o submódulo com as structs compartilhadas entre os módulos da API
pub mod shared_structs;

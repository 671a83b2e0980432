// Finnish language data shared by the phonology and declension modules

pub mod constants;

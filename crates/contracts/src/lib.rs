//! Общие типы и чистые вычисления, разделяемые backend и клиентами.
//!
//! Крейт не выполняет ввода-вывода: генерация справочных номеров (NRE/SKU)
//! и расчёт себестоимости (CoGS) принимают все входные данные явно.

pub mod domain;
pub mod shared;

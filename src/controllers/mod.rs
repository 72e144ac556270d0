pub mod categoria_controller;
pub mod cliente_controller;
pub mod funcionario_controller;
pub mod veiculo_controller;

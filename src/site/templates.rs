//! Embedded single-page template for the prompt enhancement site

/// The whole site: hero, enhancer panel, example library, FAQ accordion,
/// and the (not yet wired) account modal. Served as-is from `GET /`.
pub const PAGE_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Enhanced Prompt</title>
  <style>
    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Helvetica Neue', sans-serif;
      background: #0d0d0d;
      color: #d1d5db;
      min-height: 100vh;
    }

    .glow {
      position: fixed;
      inset: 0;
      z-index: 0;
      opacity: 0.2;
      background-image: radial-gradient(circle at 50% 0, #10b981 0%, transparent 40%);
      pointer-events: none;
    }

    .page {
      position: relative;
      z-index: 1;
      max-width: 1100px;
      margin: 0 auto;
      padding: 0 16px 60px;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 20px 0;
    }

    .brand {
      font-size: 20px;
      font-weight: 700;
      color: #fff;
    }

    .hero {
      text-align: center;
      padding: 60px 0 40px;
    }

    .hero h1 {
      font-size: 44px;
      color: #fff;
      letter-spacing: -0.5px;
      margin-bottom: 16px;
    }

    .hero p {
      max-width: 700px;
      margin: 0 auto;
      font-size: 18px;
      color: #9ca3af;
    }

    .card {
      background: rgba(17, 24, 39, 0.5);
      border: 1px solid rgba(55, 65, 81, 0.5);
      border-radius: 16px;
      padding: 20px;
      margin-top: 36px;
    }

    .mode-select {
      position: relative;
      margin-bottom: 20px;
    }

    .mode-button {
      width: 100%;
      display: flex;
      align-items: center;
      justify-content: space-between;
      background: transparent;
      border: 1px solid #374151;
      border-radius: 8px;
      padding: 12px 16px;
      color: #fff;
      cursor: pointer;
      font-size: 15px;
      text-align: left;
    }

    .mode-button small {
      display: block;
      color: #9ca3af;
      font-weight: 400;
    }

    .mode-list {
      display: none;
      position: absolute;
      top: calc(100% + 8px);
      left: 0;
      right: 0;
      background: #1c1c1c;
      border: 1px solid #374151;
      border-radius: 8px;
      padding: 8px;
      z-index: 20;
      list-style: none;
    }

    .mode-list.open {
      display: block;
    }

    .mode-list button {
      width: 100%;
      display: flex;
      align-items: center;
      justify-content: space-between;
      background: transparent;
      border: none;
      border-radius: 6px;
      padding: 12px;
      color: #fff;
      cursor: pointer;
      font-size: 15px;
      text-align: left;
    }

    .mode-list button:hover {
      background: rgba(55, 65, 81, 0.5);
    }

    .mode-list button.selected {
      background: rgba(6, 78, 59, 0.5);
    }

    .mode-list button small {
      display: block;
      color: #9ca3af;
    }

    .lock-badge {
      font-size: 12px;
      font-weight: 600;
      background: #4b5563;
      color: #e5e7eb;
      padding: 3px 8px;
      border-radius: 6px;
    }

    .panes {
      display: grid;
      grid-template-columns: 1fr;
      gap: 16px;
    }

    @media (min-width: 768px) {
      .panes {
        grid-template-columns: 1fr 1fr;
      }
    }

    .pane {
      background: rgba(31, 41, 55, 0.5);
      border: 1px solid #374151;
      border-radius: 8px;
      position: relative;
      height: 320px;
    }

    .pane textarea {
      width: 100%;
      height: 100%;
      background: transparent;
      border: none;
      resize: none;
      color: #d1d5db;
      padding: 16px;
      font-size: 15px;
      font-family: inherit;
    }

    .pane textarea:focus {
      outline: none;
    }

    .char-count {
      position: absolute;
      bottom: 10px;
      right: 14px;
      font-size: 12px;
      color: #6b7280;
    }

    .result {
      height: 100%;
      overflow-y: auto;
      padding: 16px;
      white-space: pre-wrap;
      word-break: break-word;
    }

    .placeholder {
      display: flex;
      align-items: center;
      justify-content: center;
      height: 100%;
      color: #6b7280;
      text-align: center;
      padding: 16px;
    }

    .loading {
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      height: 100%;
      text-align: center;
      color: #9ca3af;
    }

    .loading .spinner {
      width: 36px;
      height: 36px;
      border: 3px solid rgba(16, 185, 129, 0.25);
      border-top-color: #10b981;
      border-radius: 50%;
      animation: spin 0.9s linear infinite;
      margin-bottom: 14px;
    }

    @keyframes spin {
      to { transform: rotate(360deg); }
    }

    .loading .message {
      color: #fff;
      font-weight: 600;
      font-size: 16px;
    }

    .error {
      padding: 16px;
      color: #f87171;
    }

    .actions {
      margin-top: 16px;
      display: flex;
      flex-direction: column;
      gap: 12px;
    }

    .btn {
      width: 100%;
      border: none;
      border-radius: 8px;
      padding: 14px;
      font-size: 16px;
      font-weight: 600;
      cursor: pointer;
      color: #fff;
      transition: background 0.2s;
    }

    .btn-enhance {
      background: #10b981;
    }

    .btn-enhance:hover {
      background: #059669;
    }

    .btn-enhance:disabled {
      background: #1f2937;
      cursor: not-allowed;
    }

    .btn-copy {
      background: #374151;
      display: none;
    }

    .btn-copy:hover {
      background: #4b5563;
    }

    .btn-copy.copied {
      background: #10b981;
    }

    section.block {
      margin-top: 80px;
    }

    section.block h2 {
      font-size: 30px;
      color: #fff;
      text-align: center;
      margin-bottom: 10px;
    }

    section.block .sub {
      text-align: center;
      color: #9ca3af;
      font-size: 17px;
      margin-bottom: 36px;
    }

    .tabs {
      display: flex;
      border-bottom: 1px solid #374151;
      margin-bottom: 16px;
    }

    .tabs button {
      background: none;
      border: none;
      border-bottom: 2px solid transparent;
      color: #9ca3af;
      padding: 12px 16px;
      font-size: 15px;
      font-weight: 600;
      cursor: pointer;
    }

    .tabs button.active {
      color: #34d399;
      border-bottom-color: #34d399;
    }

    .examples {
      list-style: none;
      display: grid;
      grid-template-columns: 1fr;
      gap: 10px;
    }

    @media (min-width: 640px) {
      .examples {
        grid-template-columns: 1fr 1fr;
      }
    }

    .examples button {
      width: 100%;
      background: rgba(31, 41, 55, 0.5);
      border: 1px solid #374151;
      border-radius: 8px;
      padding: 14px;
      color: #d1d5db;
      font-size: 14px;
      text-align: left;
      cursor: pointer;
    }

    .examples button:hover {
      border-color: #34d399;
    }

    .accordion-item {
      border: 1px solid rgba(55, 65, 81, 0.5);
      border-radius: 10px;
      margin-bottom: 14px;
      background: rgba(17, 24, 39, 0.5);
    }

    .accordion-item > button {
      width: 100%;
      display: flex;
      align-items: center;
      justify-content: space-between;
      background: none;
      border: none;
      color: #fff;
      font-size: 16px;
      font-weight: 600;
      padding: 18px;
      cursor: pointer;
      text-align: left;
    }

    .accordion-item .body {
      display: none;
      padding: 0 18px 18px;
      color: #9ca3af;
      line-height: 1.6;
    }

    .accordion-item.open .body {
      display: block;
    }

    .accordion-item .chevron {
      transition: transform 0.2s;
    }

    .accordion-item.open .chevron {
      transform: rotate(180deg);
    }

    footer {
      margin-top: 80px;
      border-top: 1px solid rgba(55, 65, 81, 0.5);
      padding-top: 28px;
      text-align: center;
      color: #6b7280;
      font-size: 14px;
    }

    .modal-backdrop {
      display: none;
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.6);
      z-index: 50;
      align-items: center;
      justify-content: center;
      padding: 16px;
    }

    .modal-backdrop.open {
      display: flex;
    }

    .modal {
      background: #181818;
      border: 1px solid rgba(55, 65, 81, 0.5);
      border-radius: 16px;
      padding: 28px;
      max-width: 420px;
      width: 100%;
      position: relative;
    }

    .modal h3 {
      color: #fff;
      font-size: 20px;
      margin-bottom: 16px;
    }

    .modal .close {
      position: absolute;
      top: 14px;
      right: 14px;
      background: none;
      border: none;
      color: #9ca3af;
      font-size: 20px;
      cursor: pointer;
    }

    .modal input {
      width: 100%;
      background: rgba(31, 41, 55, 0.5);
      border: 1px solid #374151;
      border-radius: 8px;
      color: #d1d5db;
      padding: 12px;
      font-size: 15px;
      margin-bottom: 12px;
    }

    .modal .notice {
      color: #fbbf24;
      font-size: 14px;
      margin-top: 10px;
      display: none;
    }

    .modal .notice.visible {
      display: block;
    }
  </style>
</head>
<body>
  <div class="glow"></div>
  <div class="page">
    <header>
      <span class="brand">Enhanced Prompt</span>
      <button class="btn" style="width:auto;background:#374151;padding:10px 18px;font-size:14px" onclick="openModal()">Sign In</button>
    </header>

    <section class="hero">
      <h1>Enhance Your AI Prompts</h1>
      <p>Transform your prompts into powerful, detailed instructions that get better results from AI models. Choose your enhancement mode and see the difference.</p>
    </section>

    <div class="card" id="enhancer">
      <div class="mode-select" id="modeSelect">
        <button type="button" class="mode-button" id="modeButton" onclick="toggleModeList()">
          <span>
            <span id="modeName">Basic</span>
            <small id="modeDescription">Simple enhancements</small>
          </span>
          <span class="chevron">&#9662;</span>
        </button>
        <ul class="mode-list" id="modeList">
          <li><button type="button" class="selected" data-mode="basic" onclick="selectMode('basic')">
            <span>Basic<small>Simple enhancements</small></span>
          </button></li>
          <li><button type="button" data-mode="mid" onclick="selectMode('mid')">
            <span>Mid<small>Code &amp; image tasks</small></span>
          </button></li>
          <li><button type="button" data-mode="high" onclick="selectMode('high')">
            <span>High<small>Ultimate coding</small></span>
            <span class="lock-badge">Sign up</span>
          </button></li>
        </ul>
      </div>

      <div class="panes">
        <div class="pane">
          <textarea id="promptInput" maxlength="2000" placeholder="Enter your prompt here or try an example below..." oninput="updateCharCount()"></textarea>
          <div class="char-count" id="charCount">0/2000</div>
        </div>
        <div class="pane">
          <div class="placeholder" id="resultPlaceholder">Your enhanced prompt will appear here...</div>
          <div class="loading" id="loadingIndicator" style="display:none">
            <div class="spinner"></div>
            <p class="message" id="loadingMessage">Enhancing...</p>
            <p>Our AI is working its magic...</p>
          </div>
          <div class="error" id="errorDisplay" style="display:none"></div>
          <pre class="result" id="resultDisplay" style="display:none"></pre>
        </div>
      </div>

      <div class="actions">
        <button type="button" class="btn btn-copy" id="copyButton" onclick="copyResult()">Copy Enhanced Prompt</button>
        <button type="button" class="btn btn-enhance" id="enhanceButton" onclick="submitPrompt()" disabled>Enhance Prompt</button>
      </div>
    </div>

    <section class="block">
      <h2>Prompt Library</h2>
      <p class="sub">Not sure where to start? Try one of these examples.</p>
      <div class="card" style="margin-top:0">
        <div class="tabs" id="exampleTabs">
          <button type="button" class="active" data-tab="basic" onclick="selectExampleTab('basic')">Basic</button>
          <button type="button" data-tab="mid" onclick="selectExampleTab('mid')">Mid Tier</button>
          <button type="button" data-tab="high" onclick="selectExampleTab('high')">High Tier</button>
        </div>
        <ul class="examples" id="exampleList"></ul>
      </div>
    </section>

    <section class="block">
      <h2>Master Your AI Interactions</h2>
      <p class="sub">Discover how our prompt enhancer empowers you to communicate more effectively with any AI.</p>
      <div class="accordion-item open">
        <button type="button" onclick="toggleAccordion(this)">How The Enhancer Works <span class="chevron">&#9662;</span></button>
        <div class="body"><p>Simply enter your basic idea or question. Our system analyzes your input and enriches it with context, detail, and structure, transforming it into a high-quality prompt designed for clarity and optimal AI performance.</p></div>
      </div>
      <div class="accordion-item">
        <button type="button" onclick="toggleAccordion(this)">Why Better Prompts Matter <span class="chevron">&#9662;</span></button>
        <div class="body"><p>The quality of the output you get from an AI is directly proportional to the quality of the prompt you provide. A well-crafted prompt reduces ambiguity, provides necessary context, and guides the AI to generate more accurate, relevant, and creative responses, saving you time and iterations.</p></div>
      </div>
      <div class="accordion-item">
        <button type="button" onclick="toggleAccordion(this)">The Enhancement Process <span class="chevron">&#9662;</span></button>
        <div class="body"><p>Our enhancement process involves several stages, including keyword extraction, context expansion, and structural reformatting. We add specific instructions, constraints, and formatting cues that AIs understand best, leading to superior results across a wide range of tasks.</p></div>
      </div>
      <div class="accordion-item">
        <button type="button" onclick="toggleAccordion(this)">Quick Tips for Great Prompts <span class="chevron">&#9662;</span></button>
        <div class="body"><p>Be specific and clear about your goal. Provide context, like the target audience or desired format. Use examples to guide the AI's response. Define what you don't want to see in the output.</p></div>
      </div>
    </section>

    <footer>
      <p>&copy; 2025 Enhanced Prompt. All rights reserved. Made with care for the AI community.</p>
    </footer>
  </div>

  <div class="modal-backdrop" id="authModal" onclick="closeModalFromBackdrop(event)">
    <div class="modal">
      <button type="button" class="close" onclick="closeModal()">&times;</button>
      <h3>Create your account</h3>
      <input type="email" placeholder="Email address">
      <input type="password" placeholder="Password">
      <button type="button" class="btn btn-enhance" onclick="showAuthNotice()">Sign Up</button>
      <p class="notice" id="authNotice">Accounts are not available yet. Check back soon.</p>
    </div>
  </div>

  <script>
    var MAX_PROMPT_LENGTH = 2000;

    var MODES = {
      basic: { name: 'Basic', description: 'Simple enhancements', locked: false },
      mid: { name: 'Mid', description: 'Code & image tasks', locked: false },
      high: { name: 'High', description: 'Ultimate coding', locked: true }
    };

    var EXAMPLES = {
      basic: [
        'explain quantum computing to me',
        'write a short story about a friendly robot',
        'what are the health benefits of meditation?',
        'summarize the plot of Dune'
      ],
      mid: [
        'create a logo for a coffee shop called The Daily Grind',
        'write a python script to scrape headlines from a news website',
        'generate a meal plan for a week for a vegetarian diet',
        'draft a professional email asking for a raise'
      ],
      high: [
        'design a react component for a customizable dashboard widget',
        'explain the architecture of a microservices-based application for an e-commerce platform',
        'write a smart contract in Solidity for a simple NFT minting process',
        'create a detailed marketing strategy for a new tech startup'
      ]
    };

    var LOADING_MESSAGES = [
      'Analyzing your prompt...',
      'Adding crucial context...',
      'Optimizing for clarity...',
      'Structuring for the AI...',
      'Finalizing enhancements...'
    ];

    var selectedMode = 'basic';
    var isLoading = false;
    var loadingTimer = null;

    // Responses for superseded submissions are dropped by comparing
    // against this counter; in-flight requests are never aborted.
    var requestGeneration = 0;

    function updateCharCount() {
      var input = document.getElementById('promptInput');
      document.getElementById('charCount').textContent = input.value.length + '/' + MAX_PROMPT_LENGTH;
      document.getElementById('enhanceButton').disabled = isLoading || input.value.trim() === '';
    }

    function toggleModeList() {
      document.getElementById('modeList').classList.toggle('open');
    }

    function selectMode(mode) {
      var info = MODES[mode];
      document.getElementById('modeList').classList.remove('open');
      if (info.locked) {
        openModal();
        return;
      }
      selectedMode = mode;
      document.getElementById('modeName').textContent = info.name;
      document.getElementById('modeDescription').textContent = info.description;
      var buttons = document.querySelectorAll('#modeList button[data-mode]');
      for (var i = 0; i < buttons.length; i++) {
        buttons[i].classList.toggle('selected', buttons[i].getAttribute('data-mode') === mode);
      }
    }

    document.addEventListener('mousedown', function (event) {
      if (!document.getElementById('modeSelect').contains(event.target)) {
        document.getElementById('modeList').classList.remove('open');
      }
    });

    function showPane(id) {
      var panes = ['resultPlaceholder', 'loadingIndicator', 'errorDisplay', 'resultDisplay'];
      for (var i = 0; i < panes.length; i++) {
        document.getElementById(panes[i]).style.display = panes[i] === id ? (panes[i] === 'loadingIndicator' ? 'flex' : 'block') : 'none';
      }
    }

    function startLoadingMessages() {
      var index = 0;
      document.getElementById('loadingMessage').textContent = LOADING_MESSAGES[index];
      loadingTimer = setInterval(function () {
        index = (index + 1) % LOADING_MESSAGES.length;
        document.getElementById('loadingMessage').textContent = LOADING_MESSAGES[index];
      }, 1500);
    }

    function stopLoadingMessages() {
      if (loadingTimer) {
        clearInterval(loadingTimer);
        loadingTimer = null;
      }
    }

    function setLoading(value) {
      isLoading = value;
      if (value) {
        showPane('loadingIndicator');
        startLoadingMessages();
      } else {
        stopLoadingMessages();
      }
      updateCharCount();
    }

    function showResult(text) {
      document.getElementById('resultDisplay').textContent = text;
      showPane('resultDisplay');
      var copyButton = document.getElementById('copyButton');
      copyButton.style.display = 'block';
      copyButton.classList.remove('copied');
      copyButton.textContent = 'Copy Enhanced Prompt';
    }

    function showError(message) {
      document.getElementById('errorDisplay').textContent = message;
      showPane('errorDisplay');
      document.getElementById('copyButton').style.display = 'none';
    }

    function submitPrompt() {
      var prompt = document.getElementById('promptInput').value.trim();
      if (prompt === '' || isLoading) {
        return;
      }

      var generation = ++requestGeneration;
      setLoading(true);

      fetch('/api/enhance', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ prompt: prompt, mode: selectedMode })
      })
        .then(function (response) {
          return response.json().then(function (data) {
            return { ok: response.ok, data: data };
          });
        })
        .then(function (result) {
          if (generation !== requestGeneration) {
            return; // stale response for a superseded submission
          }
          setLoading(false);
          if (result.ok && typeof result.data.enhancedPrompt === 'string') {
            showResult(result.data.enhancedPrompt);
          } else {
            showError(result.data.error || 'An unexpected error occurred. Please try again.');
          }
        })
        .catch(function () {
          if (generation !== requestGeneration) {
            return;
          }
          setLoading(false);
          showError('Could not reach the enhancement service. Please try again.');
        });
    }

    function copyResult() {
      var text = document.getElementById('resultDisplay').textContent;
      if (!text) {
        return;
      }
      navigator.clipboard.writeText(text);
      var copyButton = document.getElementById('copyButton');
      copyButton.classList.add('copied');
      copyButton.textContent = 'Copied!';
      setTimeout(function () {
        copyButton.classList.remove('copied');
        copyButton.textContent = 'Copy Enhanced Prompt';
      }, 2000);
    }

    function selectExampleTab(tab) {
      var buttons = document.querySelectorAll('#exampleTabs button');
      for (var i = 0; i < buttons.length; i++) {
        buttons[i].classList.toggle('active', buttons[i].getAttribute('data-tab') === tab);
      }
      var list = document.getElementById('exampleList');
      list.innerHTML = '';
      var examples = EXAMPLES[tab];
      for (var j = 0; j < examples.length; j++) {
        var item = document.createElement('li');
        var button = document.createElement('button');
        button.type = 'button';
        button.textContent = examples[j];
        button.addEventListener('click', function (event) {
          document.getElementById('promptInput').value = event.target.textContent;
          updateCharCount();
          document.getElementById('enhancer').scrollIntoView({ behavior: 'smooth' });
        });
        item.appendChild(button);
        list.appendChild(item);
      }
    }

    function toggleAccordion(button) {
      button.parentElement.classList.toggle('open');
    }

    function openModal() {
      document.getElementById('authModal').classList.add('open');
      document.getElementById('authNotice').classList.remove('visible');
    }

    function closeModal() {
      document.getElementById('authModal').classList.remove('open');
    }

    function closeModalFromBackdrop(event) {
      if (event.target === document.getElementById('authModal')) {
        closeModal();
      }
    }

    function showAuthNotice() {
      document.getElementById('authNotice').classList.add('visible');
    }

    document.addEventListener('keydown', function (event) {
      if (event.key === 'Escape') {
        closeModal();
      }
    });

    selectExampleTab('basic');
    updateCharCount();
  </script>
</body>
</html>
"##;
